//! Core data structures for sentiglobe
//!
//! This crate provides the fundamental types shared by the sentiment-globe
//! pipeline: geographic coordinates and their mapping onto the reference
//! sphere, the subdivided-icosahedron mesh, country samples, and rigid
//! transforms.

pub mod error;
pub mod geo;
pub mod point;
pub mod sample;
pub mod sphere;
pub mod transform;

pub use error::*;
pub use geo::*;
pub use point::*;
pub use sample::*;
pub use sphere::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

/// Common result type for sentiglobe operations
pub type Result<T> = std::result::Result<T, Error>;
