//! Scene context: the explicit state struct behind the frame loop
//!
//! One `SceneContext` replaces the host framework's module-level shared
//! objects. It is constructed at startup, mutated by `advance` and the UI
//! setters, and dropped on shutdown. Frame order is fixed: camera tween
//! first, then rotation, then marker projection, so projections always see
//! the frame's final transforms.

use crate::camera::Camera;
use crate::focus::{FocusController, FocusParams, HaloState};
use crate::projector::{project_marker, MarkerAnchor, MarkerProjection, ProjectorParams, Viewport};
use crate::uniforms::DisplacementUniforms;
use sentiglobe_core::{CountryCode, CountrySample, WorldTransform};
use sentiglobe_field::DisplacementField;

/// Default auto-rotation rate in radians per second.
pub const DEFAULT_SPIN_RATE: f32 = 0.15;

/// All mutable scene state the core owns.
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub camera: Camera,
    pub world: WorldTransform,
    pub auto_rotate: bool,
    pub markers_visible: bool,
    pub spin_rate: f32,
    pub point_size: f32,
    displacement_scale: f32,
    viewport: Viewport,
    markers: Vec<MarkerAnchor>,
    focus: FocusController,
    projector_params: ProjectorParams,
}

impl SceneContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: Camera::home(viewport.width / viewport.height),
            world: WorldTransform::identity(),
            auto_rotate: true,
            markers_visible: true,
            spin_rate: DEFAULT_SPIN_RATE,
            point_size: 3.0,
            displacement_scale: 1.0,
            viewport,
            markers: Vec::new(),
            focus: FocusController::default(),
            projector_params: ProjectorParams::default(),
        }
    }

    pub fn with_params(viewport: Viewport, focus: FocusParams, projector: ProjectorParams) -> Self {
        Self {
            focus: FocusController::new(focus),
            projector_params: projector,
            ..Self::new(viewport)
        }
    }

    /// Replace the marker set from a fresh batch of samples. Called once
    /// per successful data fetch.
    pub fn set_samples(&mut self, samples: &[CountrySample]) {
        self.markers = samples
            .iter()
            .map(|s| MarkerAnchor::new(s.code, s.position))
            .collect();
    }

    pub fn markers(&self) -> &[MarkerAnchor] {
        &self.markers
    }

    pub fn halo(&self) -> &HaloState {
        self.focus.halo()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    pub fn displacement_scale(&self) -> f32 {
        self.displacement_scale
    }

    /// Set the displacement multiplier, clamped to the UI range [0, 3].
    pub fn set_displacement_scale(&mut self, scale: f32) {
        self.displacement_scale = scale.clamp(0.0, 3.0);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect_ratio = viewport.width / viewport.height;
    }

    /// Focus the camera on a country's marker. Returns false when no marker
    /// carries that code.
    pub fn focus_country(&mut self, code: CountryCode) -> bool {
        let Some(marker) = self.markers.iter().find(|m| m.code == code) else {
            return false;
        };
        let live = marker.live_position(&self.world);
        self.focus.focus(self.camera.position, live);
        true
    }

    pub fn unfocus(&mut self) {
        self.focus.unfocus(self.camera.position);
    }

    /// Advance one frame: tween, then rotation, then marker projection.
    pub fn advance(&mut self, dt: f32) {
        if let Some(position) = self.focus.advance(dt) {
            self.camera.position = position;
        }

        if self.auto_rotate && !self.focus.is_focused() {
            self.world.spin(self.spin_rate * dt);
        }

        self.project_markers();
    }

    fn project_markers(&mut self) {
        if !self.markers_visible {
            for marker in &mut self.markers {
                marker.visible = false;
            }
            return;
        }

        let view_projection = self.camera.view_projection_matrix();
        let camera_position = self.camera.position;
        for marker in &mut self.markers {
            let projection: MarkerProjection = project_marker(
                &marker.rest_position,
                &self.world,
                &view_projection,
                &camera_position,
                self.viewport,
                &self.projector_params,
            );
            marker.apply(projection);
        }
    }

    /// Uniform block for the current frame.
    pub fn uniforms(&self, field: &DisplacementField) -> DisplacementUniforms {
        DisplacementUniforms::new(field, self.displacement_scale, self.point_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sentiglobe_core::{GeoCoord, Point3f};

    fn sample(code: &str, score: f32, lat: f32, lon: f32) -> CountrySample {
        CountrySample::from_geo(code.parse().unwrap(), score, GeoCoord::new(lat, lon), 5.0)
    }

    fn context_with_samples() -> SceneContext {
        let mut ctx = SceneContext::new(Viewport::new(800.0, 600.0));
        ctx.set_samples(&[
            sample("USA", 0.8, 39.8, -98.6),
            sample("CHN", -0.6, 35.9, 104.2),
        ]);
        ctx
    }

    #[test]
    fn advance_projects_every_marker() {
        let mut ctx = context_with_samples();
        ctx.advance(0.016);
        assert_eq!(ctx.markers().len(), 2);
        for marker in ctx.markers() {
            if marker.visible {
                assert!(marker.screen_x >= 0.0 && marker.screen_x <= 800.0);
                assert!(marker.screen_y >= 0.0 && marker.screen_y <= 600.0);
            }
        }
    }

    #[test]
    fn auto_rotation_spins_the_world() {
        let mut ctx = context_with_samples();
        let before = ctx.world;
        ctx.advance(0.5);
        assert_ne!(ctx.world, before);
    }

    #[test]
    fn rotation_pauses_while_focused() {
        let mut ctx = context_with_samples();
        assert!(ctx.focus_country("USA".parse().unwrap()));
        let before = ctx.world;
        ctx.advance(0.1);
        assert_eq!(ctx.world, before);
        assert!(ctx.is_focused());
    }

    #[test]
    fn rotation_stays_paused_after_the_flight_lands() {
        let mut ctx = context_with_samples();
        assert!(ctx.focus_country("USA".parse().unwrap()));
        for _ in 0..200 {
            ctx.advance(0.02);
        }
        let before = ctx.world;
        ctx.advance(0.1);
        assert_eq!(ctx.world, before, "still focused, still paused");
    }

    #[test]
    fn unfocus_lets_the_toggle_govern_rotation_again() {
        let mut ctx = context_with_samples();
        ctx.focus_country("CHN".parse().unwrap());
        ctx.unfocus();
        let before = ctx.world;
        ctx.advance(0.1);
        assert_ne!(ctx.world, before);
    }

    #[test]
    fn focus_on_unknown_country_is_a_noop() {
        let mut ctx = context_with_samples();
        assert!(!ctx.focus_country("ATA".parse().unwrap()));
        assert!(!ctx.is_focused());
    }

    #[test]
    fn focus_flies_toward_the_scaled_anchor() {
        let mut ctx = context_with_samples();
        ctx.auto_rotate = false;
        ctx.focus_country("USA".parse().unwrap());
        for _ in 0..200 {
            ctx.advance(0.02);
        }
        // 2.2x an anchor on a radius-5 sphere
        assert_relative_eq!(ctx.camera.position.coords.norm(), 11.0, epsilon = 1e-2);
    }

    #[test]
    fn hiding_markers_hides_them_all() {
        let mut ctx = context_with_samples();
        ctx.advance(0.016);
        ctx.markers_visible = false;
        ctx.advance(0.016);
        assert!(ctx.markers().iter().all(|m| !m.visible));
    }

    #[test]
    fn displacement_scale_is_clamped_to_ui_range() {
        let mut ctx = context_with_samples();
        ctx.set_displacement_scale(7.5);
        assert_eq!(ctx.displacement_scale(), 3.0);
        ctx.set_displacement_scale(-1.0);
        assert_eq!(ctx.displacement_scale(), 0.0);
    }

    #[test]
    fn uniforms_carry_field_max_and_scale() {
        let mut ctx = context_with_samples();
        ctx.set_displacement_scale(2.0);
        let field = DisplacementField {
            values: vec![0.4, -0.9],
            max_abs: 0.9,
        };
        let u = ctx.uniforms(&field);
        assert_eq!(u.max_displacement, 0.9);
        assert_eq!(u.displacement_scale, 2.0);
    }

    #[test]
    fn resize_updates_the_aspect_ratio() {
        let mut ctx = context_with_samples();
        ctx.resize(Viewport::new(1024.0, 512.0));
        assert_relative_eq!(ctx.camera.aspect_ratio, 2.0);
    }

    #[test]
    fn front_marker_stays_on_screen_after_small_rotation() {
        let mut ctx = SceneContext::new(Viewport::new(800.0, 600.0));
        // Anchor straight toward the home camera
        ctx.set_samples(&[CountrySample {
            code: "NZL".parse().unwrap(),
            score: 0.1,
            position: Point3f::new(0.0, 0.0, 5.0),
        }]);
        ctx.advance(0.01);
        let m = ctx.markers()[0];
        assert!(m.visible);
        assert_relative_eq!(m.screen_x, 400.0, epsilon = 5.0);
        assert_relative_eq!(m.screen_y, 300.0, epsilon = 5.0);
    }
}
