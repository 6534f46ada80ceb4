//! Camera utilities for the globe scene

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Distance of the default camera from the globe center, along +Z.
pub const HOME_DISTANCE: f32 = 15.0;

/// A perspective camera looking at the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// The default origin-facing camera at [`HOME_DISTANCE`] along +Z.
    pub fn home(aspect_ratio: f32) -> Self {
        Self::new(
            Point3::new(0.0, 0.0, HOME_DISTANCE),
            Point3::origin(),
            Vector3::y(),
            std::f32::consts::FRAC_PI_4,
            aspect_ratio,
            0.1,
            1000.0,
        )
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far).into_inner()
    }

    /// Combined view-projection matrix, the transform the marker projector
    /// pushes live positions through.
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::home(16.0 / 9.0)
    }
}
