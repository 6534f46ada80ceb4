//! Rigid transforms applied to globe geometry
//!
//! The globe only ever rotates (auto-rotation and user drag), so the world
//! transform is kept as a rotation-only type rather than a general matrix.

use crate::point::{Point3f, Vector3f};
use nalgebra::{Matrix4, Unit, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// The world transform of the globe: a rotation about the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldTransform {
    rotation: UnitQuaternion<f32>,
}

impl WorldTransform {
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
        }
    }

    pub fn from_rotation(rotation: UnitQuaternion<f32>) -> Self {
        Self { rotation }
    }

    /// Rotation about the +Y axis, the globe's spin axis.
    pub fn yaw(angle_rad: f32) -> Self {
        Self {
            rotation: UnitQuaternion::from_axis_angle(&Unit::new_normalize(Vector3f::y()), angle_rad),
        }
    }

    /// Apply an additional yaw on top of the current rotation.
    pub fn spin(&mut self, angle_rad: f32) {
        self.rotation = Self::yaw(angle_rad).rotation * self.rotation;
    }

    pub fn transform_point(&self, point: &Point3f) -> Point3f {
        self.rotation * point
    }

    pub fn transform_vector(&self, vector: &Vector3f) -> Vector3f {
        self.rotation * vector
    }

    pub fn rotation(&self) -> UnitQuaternion<f32> {
        self.rotation
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        self.rotation.to_homogeneous()
    }

    pub fn inverse(&self) -> Self {
        Self {
            rotation: self.rotation.inverse(),
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for WorldTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            rotation: self.rotation * rhs.rotation,
        }
    }
}
