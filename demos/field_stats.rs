//! Field builder scaling check
//!
//! Builds the displacement field at increasing tessellation levels with and
//! without the distance cutoff and prints vertex counts alongside the
//! largest divergence between the two variants.

use sentiglobe_core::SphereMesh;
use sentiglobe_data::{bundled_scores, samples_from_scores};
use sentiglobe_field::{
    build_displacement_field, build_displacement_field_with_cutoff, FieldParams,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let samples = samples_from_scores(&bundled_scores(), 5.0);
    let params = FieldParams::default();

    println!("level  vertices  max|d|    cutoff divergence");
    for level in 0..=5 {
        let mesh = SphereMesh::icosphere(5.0, level)?;
        let full = build_displacement_field(&samples, &mesh, &params);
        let pruned = build_displacement_field_with_cutoff(&samples, &mesh, &params, 1e-4);

        let divergence = full
            .values
            .iter()
            .zip(&pruned.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f32, f32::max);

        println!(
            "{level:>5}  {:>8}  {:.5}   {divergence:.6}",
            mesh.len(),
            full.max_abs
        );
    }

    Ok(())
}
