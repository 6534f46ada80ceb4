//! GPU-facing uniform block
//!
//! The renderer's displacement shader consumes three scalars; they are
//! packed std140-style into a 16-byte block for direct buffer upload.

use bytemuck::{Pod, Zeroable};
use sentiglobe_field::DisplacementField;

/// Uniform scalars consumed by the displacement shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DisplacementUniforms {
    /// Maximum absolute displacement, for color normalization. Never zero.
    pub max_displacement: f32,
    /// User-controlled multiplier, UI range [0, 3].
    pub displacement_scale: f32,
    /// Point sprite size in pixels.
    pub point_size: f32,
    pub _padding: f32,
}

impl DisplacementUniforms {
    pub fn new(field: &DisplacementField, displacement_scale: f32, point_size: f32) -> Self {
        Self {
            max_displacement: field.max_abs,
            displacement_scale,
            point_size,
            _padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<DisplacementUniforms>(), 16);
    }

    #[test]
    fn neutral_field_keeps_a_safe_divisor() {
        let field = DisplacementField::neutral(32);
        let uniforms = DisplacementUniforms::new(&field, 1.0, 3.0);
        assert_eq!(uniforms.max_displacement, 1.0);
    }

    #[test]
    fn bytes_round_trip_through_pod() {
        let field = DisplacementField {
            values: vec![0.5, -0.25],
            max_abs: 0.5,
        };
        let uniforms = DisplacementUniforms::new(&field, 2.0, 4.0);
        let bytes = bytemuck::bytes_of(&uniforms);
        let back: DisplacementUniforms = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(back, uniforms);
    }
}
