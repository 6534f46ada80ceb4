//! # sentiglobe-field
//!
//! Displacement field computation: converts sparse per-country sentiment
//! samples into a dense per-vertex scalar field over the globe mesh.

pub mod displacement;

pub use displacement::*;
