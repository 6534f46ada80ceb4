//! Focus controller: camera fly-to and the selection halo
//!
//! Selecting a country flies the camera out along the ray from the globe
//! center through the selected anchor, and shows a pulsing halo at the
//! anchor. Re-triggering focus while a flight is in progress replaces the
//! tween outright; requests are never queued.

use crate::camera::HOME_DISTANCE;
use crate::tween::CameraTween;
use sentiglobe_core::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// Tuning for focus behavior. Defaults match the reference visualization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusParams {
    /// Camera distance as a multiple of the anchor's distance from center.
    pub zoom_factor: f32,
    /// Tween duration in seconds, used for both focus and unfocus.
    pub duration: f32,
    /// Where the camera returns to on unfocus.
    pub home: Point3f,
    /// Halo pulse amplitude as a fraction of its base scale.
    pub pulse_amplitude: f32,
    /// Halo pulse rate in cycles per second.
    pub pulse_rate: f32,
}

impl Default for FocusParams {
    fn default() -> Self {
        Self {
            zoom_factor: 2.2,
            duration: 1.2,
            home: Point3f::new(0.0, 0.0, HOME_DISTANCE),
            pulse_amplitude: 0.1,
            pulse_rate: 1.5,
        }
    }
}

/// Derived visual state of the selection halo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HaloState {
    Hidden,
    Visible {
        /// Anchor position the halo sits on.
        position: Point3f,
        /// Outward direction from the globe center.
        normal: Vector3f,
        /// Accumulated pulse time in seconds.
        phase: f32,
    },
}

impl HaloState {
    pub fn is_visible(&self) -> bool {
        matches!(self, HaloState::Visible { .. })
    }

    /// Current pulsing scale, 1.0 while hidden.
    pub fn pulse_scale(&self, params: &FocusParams) -> f32 {
        match self {
            HaloState::Hidden => 1.0,
            HaloState::Visible { phase, .. } => {
                1.0 + params.pulse_amplitude
                    * (std::f32::consts::TAU * params.pulse_rate * phase).sin()
            }
        }
    }
}

/// Drives camera repositioning and the halo when a marker is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusController {
    params: FocusParams,
    tween: Option<CameraTween>,
    focused: bool,
    halo: HaloState,
}

impl FocusController {
    pub fn new(params: FocusParams) -> Self {
        Self {
            params,
            tween: None,
            focused: false,
            halo: HaloState::Hidden,
        }
    }

    pub fn params(&self) -> &FocusParams {
        &self.params
    }

    /// Auto-rotation is suspended while focused.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn halo(&self) -> &HaloState {
        &self.halo
    }

    /// Target camera position for an anchor: along the center-to-anchor ray,
    /// `zoom_factor` times the anchor's distance out.
    pub fn focus_target(&self, anchor_position: &Point3f) -> Point3f {
        Point3f::from(anchor_position.coords * self.params.zoom_factor)
    }

    /// Fly the camera toward `anchor_position`, replacing any in-flight
    /// tween, and reveal the halo there.
    pub fn focus(&mut self, camera_position: Point3f, anchor_position: Point3f) {
        let target = self.focus_target(&anchor_position);
        self.tween = Some(CameraTween::new(camera_position, target, self.params.duration));
        self.focused = true;
        self.halo = HaloState::Visible {
            position: anchor_position,
            normal: anchor_position.coords.normalize(),
            phase: 0.0,
        };
    }

    /// Fly back home and hide the halo. Whether auto-rotation resumes is the
    /// UI toggle's business, not ours.
    pub fn unfocus(&mut self, camera_position: Point3f) {
        self.tween = Some(CameraTween::new(
            camera_position,
            self.params.home,
            self.params.duration,
        ));
        self.focused = false;
        self.halo = HaloState::Hidden;
    }

    /// Advance the tween and halo pulse by one frame. Returns the new
    /// camera position while a flight is in progress.
    pub fn advance(&mut self, dt: f32) -> Option<Point3f> {
        if let HaloState::Visible { phase, .. } = &mut self.halo {
            *phase += dt;
        }

        let tween = self.tween.as_mut()?;
        let position = tween.advance(dt);
        if tween.finished() {
            self.tween = None;
        }
        Some(position)
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(FocusParams::default())
    }
}
