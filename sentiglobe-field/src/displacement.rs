//! Displacement field construction
//!
//! Each mesh vertex accumulates an exponentially-decaying contribution from
//! every country sample. Distance is straight-line (chord) distance in the
//! embedding space rather than great-circle distance: with the reference
//! decay rate contributions are negligible beyond a small neighborhood, so
//! the chord/arc discrepancy never matters at the scales involved.

use rayon::prelude::*;
use sentiglobe_core::{CountrySample, DisplacedPoint3f, Point3f, SphereMesh};
use serde::{Deserialize, Serialize};

/// Tuning parameters for the field build.
///
/// `decay_rate` controls how localized each sample's influence is; larger
/// values give sharper, more localized bumps. The default matches the
/// empirically tuned reference value and is an aesthetic choice, not a
/// derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    pub decay_rate: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self { decay_rate: 4.0 }
    }
}

/// A dense per-vertex scalar field, index-aligned with the mesh it was
/// built from, plus the maximum absolute value for downstream color and
/// intensity normalization.
///
/// `max_abs` is never zero: when every value is zero (empty sample set, or
/// all scores zero) it falls back to 1.0 so consumers can divide by it
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplacementField {
    pub values: Vec<f32>,
    pub max_abs: f32,
}

impl DisplacementField {
    /// A neutral field of `len` zeros.
    pub fn neutral(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
            max_abs: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index` scaled into [-1, 1] by `max_abs`.
    pub fn normalized(&self, index: usize) -> f32 {
        self.values[index] / self.max_abs
    }

    /// Interleave the field with its mesh into the per-vertex attribute
    /// buffer the renderer uploads. Panics in debug builds if the field and
    /// mesh are not index-aligned.
    pub fn displaced_points(&self, mesh: &SphereMesh) -> Vec<DisplacedPoint3f> {
        debug_assert_eq!(self.values.len(), mesh.len());
        mesh.rest_positions()
            .iter()
            .zip(&self.values)
            .map(|(position, &displacement)| DisplacedPoint3f {
                position: *position,
                displacement,
            })
            .collect()
    }

    fn from_values(values: Vec<f32>) -> Self {
        let max_abs = values
            .iter()
            .map(|v| v.abs())
            .fold(0.0_f32, f32::max);
        Self {
            values,
            max_abs: if max_abs > 0.0 { max_abs } else { 1.0 },
        }
    }
}

/// Build the displacement field for `mesh` from `samples`.
///
/// For each vertex `v`:
///
/// ```text
/// values[v] = sum over samples s of  score_s * exp(-decay_rate * |v - pos_s|)
/// ```
///
/// Runs in O(samples x vertices); evaluation is data-parallel over vertices.
/// An empty sample set yields a neutral field, an empty mesh an empty one.
pub fn build_displacement_field(
    samples: &[CountrySample],
    mesh: &SphereMesh,
    params: &FieldParams,
) -> DisplacementField {
    if samples.is_empty() {
        return DisplacementField::neutral(mesh.len());
    }

    let values: Vec<f32> = mesh
        .rest_positions()
        .par_iter()
        .map(|vertex| accumulate(vertex, samples, params.decay_rate, f32::INFINITY))
        .collect();

    DisplacementField::from_values(values)
}

/// Like [`build_displacement_field`], but skips samples farther from a
/// vertex than the distance at which their contribution falls below
/// `epsilon` times the score.
///
/// The cutoff distance solves `exp(-decay * d) = epsilon`, i.e.
/// `d = -ln(epsilon) / decay`. With the reference decay of 4.0 and epsilon
/// 1e-4, that is about 2.3 radius-units, which prunes the bulk of the
/// sample set for fine tessellations.
pub fn build_displacement_field_with_cutoff(
    samples: &[CountrySample],
    mesh: &SphereMesh,
    params: &FieldParams,
    epsilon: f32,
) -> DisplacementField {
    if samples.is_empty() {
        return DisplacementField::neutral(mesh.len());
    }

    let cutoff = -epsilon.ln() / params.decay_rate;
    let values: Vec<f32> = mesh
        .rest_positions()
        .par_iter()
        .map(|vertex| accumulate(vertex, samples, params.decay_rate, cutoff))
        .collect();

    DisplacementField::from_values(values)
}

fn accumulate(vertex: &Point3f, samples: &[CountrySample], decay: f32, cutoff: f32) -> f32 {
    let mut sum = 0.0;
    for sample in samples {
        let dist = (vertex - sample.position).norm();
        if dist > cutoff {
            continue;
        }
        sum += sample.score * (-decay * dist).exp();
    }
    sum
}
