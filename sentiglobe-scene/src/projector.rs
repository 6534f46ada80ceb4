//! Per-frame marker projection
//!
//! Each country keeps a fixed anchor on the globe surface; every rendered
//! frame its live position (after globe rotation) is projected through the
//! camera into pixel coordinates for the 2D overlay layer. Projection is a
//! pure function of explicit arguments so it stays testable without any
//! rendering dependency.

use nalgebra::Matrix4;
use sentiglobe_core::{CountryCode, Point3f, WorldTransform};
use serde::{Deserialize, Serialize};

/// Overlay surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Tuning for the hemisphere visibility test.
///
/// A marker is front-facing when the dot product between its live direction
/// and the camera direction (both from the origin) exceeds the threshold.
/// The default sits slightly past the exact horizon so markers do not pop
/// right at the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectorParams {
    pub visibility_threshold: f32,
}

impl Default for ProjectorParams {
    fn default() -> Self {
        Self {
            visibility_threshold: -0.2,
        }
    }
}

/// The result of projecting one anchor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerProjection {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

/// Persistent association between a country's fixed anchor and its overlay
/// element. Screen coordinates go stale while the marker is hidden; only
/// the visibility flag is authoritative every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerAnchor {
    pub code: CountryCode,
    pub rest_position: Point3f,
    pub screen_x: f32,
    pub screen_y: f32,
    pub visible: bool,
}

impl MarkerAnchor {
    pub fn new(code: CountryCode, rest_position: Point3f) -> Self {
        Self {
            code,
            rest_position,
            screen_x: 0.0,
            screen_y: 0.0,
            visible: false,
        }
    }

    /// Fold one frame's projection into the anchor, preserving stale screen
    /// coordinates while hidden.
    pub fn apply(&mut self, projection: MarkerProjection) {
        self.visible = projection.visible;
        if projection.visible {
            self.screen_x = projection.x;
            self.screen_y = projection.y;
        }
    }

    /// The anchor's position under the current globe rotation.
    pub fn live_position(&self, world: &WorldTransform) -> Point3f {
        world.transform_point(&self.rest_position)
    }
}

/// Map normalized device coordinates to pixel coordinates.
///
/// Y is flipped: NDC Y grows upward, screen Y grows downward.
pub fn ndc_to_pixels(ndc_x: f32, ndc_y: f32, viewport: Viewport) -> (f32, f32) {
    let x = (ndc_x * 0.5 + 0.5) * viewport.width;
    let y = (-ndc_y * 0.5 + 0.5) * viewport.height;
    (x, y)
}

/// Project one anchor position for the current frame.
///
/// The rest position is carried through the world rotation, tested against
/// the front-hemisphere threshold, and (when visible) pushed through the
/// camera's view-projection into pixel coordinates. Hidden markers report
/// `(0, 0)`; callers keep their previous coordinates via
/// [`MarkerAnchor::apply`].
pub fn project_marker(
    rest_position: &Point3f,
    world: &WorldTransform,
    view_projection: &Matrix4<f32>,
    camera_position: &Point3f,
    viewport: Viewport,
    params: &ProjectorParams,
) -> MarkerProjection {
    let live = world.transform_point(rest_position);

    let live_dir = live.coords.normalize();
    let camera_dir = camera_position.coords.normalize();
    if live_dir.dot(&camera_dir) <= params.visibility_threshold {
        return MarkerProjection {
            x: 0.0,
            y: 0.0,
            visible: false,
        };
    }

    let clip = view_projection * live.to_homogeneous();
    let (x, y) = ndc_to_pixels(clip.x / clip.w, clip.y / clip.w, viewport);
    MarkerProjection { x, y, visible: true }
}
