//! Point types and related functionality

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A mesh vertex paired with its computed scalar displacement, laid out for
/// direct upload as a per-vertex attribute buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct DisplacedPoint3f {
    pub position: Point3f,
    pub displacement: f32,
}

unsafe impl Pod for DisplacedPoint3f {}
unsafe impl Zeroable for DisplacedPoint3f {}

impl Default for DisplacedPoint3f {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            displacement: 0.0,
        }
    }
}
