//! Integration tests for sentiglobe-field
//!
//! These exercise the full path from geographic samples to a dense field
//! over a realistic icosphere tessellation.

use rand::{Rng, SeedableRng};
use sentiglobe_core::{CountryCode, CountrySample, GeoCoord, Point3f, SphereMesh};
use sentiglobe_field::{build_displacement_field, DisplacementField, FieldParams};

fn sample_at(code: &str, score: f32, lat: f32, lon: f32, radius: f32) -> CountrySample {
    let code: CountryCode = code.parse().unwrap();
    CountrySample::from_geo(code, score, GeoCoord::new(lat, lon), radius)
}

#[test]
fn usa_chn_scenario_shapes_the_field() {
    let radius = 5.0;
    let samples = vec![
        sample_at("USA", 0.8, 39.8, -98.6, radius),
        sample_at("CHN", -0.6, 35.9, 104.2, radius),
    ];
    let mesh = SphereMesh::icosphere(radius, 3).unwrap();
    let field = build_displacement_field(&samples, &mesh, &FieldParams::default());

    let usa_pos = samples[0].position;
    let near_usa = mesh.nearest_index(&usa_pos).unwrap();

    // Sign near the sample matches the sample's sign
    assert!(field.values[near_usa] > 0.0);

    // Magnitude exceeds every vertex more than two chord-units away
    let near_mag = field.values[near_usa].abs();
    for (i, p) in mesh.rest_positions().iter().enumerate() {
        if (p - usa_pos).norm() > 2.0 {
            assert!(
                field.values[i].abs() < near_mag,
                "vertex {i} too strong at chord distance {}",
                (p - usa_pos).norm()
            );
        }
    }

    let chn_pos = samples[1].position;
    let near_chn = mesh.nearest_index(&chn_pos).unwrap();
    assert!(field.values[near_chn] < 0.0);
}

#[test]
fn max_abs_tracks_true_maximum_for_random_configurations() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5e171);
    let radius = 5.0;
    let mesh = SphereMesh::icosphere(radius, 2).unwrap();

    for _ in 0..20 {
        let count = rng.gen_range(1..=15);
        let samples: Vec<CountrySample> = (0..count)
            .map(|i| {
                let lat = rng.gen_range(-90.0..90.0);
                let lon = rng.gen_range(-180.0..180.0);
                let score = rng.gen_range(-2.0..2.0);
                let code: CountryCode = codes()[i % codes().len()].parse().unwrap();
                CountrySample::from_geo(code, score, GeoCoord::new(lat, lon), radius)
            })
            .collect();

        let field = build_displacement_field(&samples, &mesh, &FieldParams::default());
        let true_max = field
            .values
            .iter()
            .map(|v| v.abs())
            .fold(0.0_f32, f32::max);

        if true_max > 0.0 {
            assert_eq!(field.max_abs, true_max);
        } else {
            assert_eq!(field.max_abs, 1.0);
        }
        for v in &field.values {
            assert!(field.max_abs >= v.abs());
        }
    }
}

#[test]
fn field_is_index_aligned_with_mesh() {
    let radius = 5.0;
    let mesh = SphereMesh::icosphere(radius, 2).unwrap();
    let samples = vec![sample_at("RUS", 0.5, 61.5, 105.3, radius)];
    let field = build_displacement_field(&samples, &mesh, &FieldParams::default());
    assert_eq!(field.len(), mesh.len());
}

#[test]
fn neutral_field_divides_safely() {
    let field = DisplacementField::neutral(64);
    for i in 0..field.len() {
        assert!(field.normalized(i).is_finite());
        assert_eq!(field.normalized(i), 0.0);
    }
}

#[test]
fn superposition_of_opposite_samples_cancels_at_the_midpoint() {
    // Two equal-and-opposite samples placed symmetrically about a vertex
    let radius = 5.0;
    let mid = Point3f::new(0.0, radius, 0.0);
    let a = sample_at("NOR", 1.0, 80.0, 0.0, radius);
    let b = sample_at("SWE", -1.0, 80.0, 180.0, radius);
    let mesh = SphereMesh::from_positions(vec![mid, a.position, b.position], radius);

    let field = build_displacement_field(&[a, b], &mesh, &FieldParams::default());
    assert!(field.values[0].abs() < 1e-4);
}

fn codes() -> &'static [&'static str] {
    &[
        "USA", "CHN", "IND", "BRA", "RUS", "JPN", "DEU", "GBR", "FRA", "AUS", "ZAF", "CAN", "MEX",
        "EGY", "KOR",
    ]
}
