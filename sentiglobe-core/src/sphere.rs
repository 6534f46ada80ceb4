//! Reference-sphere mesh generation
//!
//! The globe surface is a subdivided icosahedron projected onto a sphere of
//! fixed radius. Rest positions are generated once and never change; only
//! the per-vertex displacement scalar computed elsewhere varies.

use crate::error::{Error, Result};
use crate::point::Point3f;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed point set of the globe surface.
///
/// Vertices are identified by index; `rest_positions[i]` is the undisplaced
/// location of vertex `i` on the sphere of radius `radius`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereMesh {
    rest_positions: Vec<Point3f>,
    radius: f32,
}

impl SphereMesh {
    /// Build a mesh by subdividing an icosahedron `subdivisions` times and
    /// projecting every vertex onto the sphere of the given radius.
    ///
    /// Vertex counts grow as 12, 42, 162, 642, 2562, ... per subdivision
    /// level. Levels above 7 are rejected to keep generation bounded.
    pub fn icosphere(radius: f32, subdivisions: u32) -> Result<Self> {
        if radius <= 0.0 {
            return Err(Error::Geometry("radius must be positive".to_string()));
        }
        if subdivisions > 7 {
            return Err(Error::Geometry(format!(
                "subdivision level {subdivisions} too high (max 7)"
            )));
        }

        let (mut vertices, mut faces) = icosahedron();
        for _ in 0..subdivisions {
            faces = subdivide(&mut vertices, &faces);
        }

        let rest_positions = vertices
            .iter()
            .map(|v| {
                let n = v.coords.normalize();
                Point3f::from(n * radius)
            })
            .collect();

        Ok(Self {
            rest_positions,
            radius,
        })
    }

    /// Construct directly from precomputed positions.
    pub fn from_positions(rest_positions: Vec<Point3f>, radius: f32) -> Self {
        Self {
            rest_positions,
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.rest_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rest_positions.is_empty()
    }

    pub fn rest_positions(&self) -> &[Point3f] {
        &self.rest_positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3f> {
        self.rest_positions.iter()
    }

    /// Index of the vertex closest to `query` by straight-line distance.
    ///
    /// Brute force; the mesh is a few thousand points at the reference
    /// tessellation so a linear scan is fine.
    pub fn nearest_index(&self, query: &Point3f) -> Option<usize> {
        self.rest_positions
            .iter()
            .enumerate()
            .map(|(idx, p)| (idx, (p - query).norm_squared()))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(idx, _)| idx)
    }
}

/// The 12 vertices and 20 faces of a unit-ish icosahedron.
fn icosahedron() -> (Vec<Point3f>, Vec<[usize; 3]>) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let vertices = vec![
        Point3f::new(-1.0, t, 0.0),
        Point3f::new(1.0, t, 0.0),
        Point3f::new(-1.0, -t, 0.0),
        Point3f::new(1.0, -t, 0.0),
        Point3f::new(0.0, -1.0, t),
        Point3f::new(0.0, 1.0, t),
        Point3f::new(0.0, -1.0, -t),
        Point3f::new(0.0, 1.0, -t),
        Point3f::new(t, 0.0, -1.0),
        Point3f::new(t, 0.0, 1.0),
        Point3f::new(-t, 0.0, -1.0),
        Point3f::new(-t, 0.0, 1.0),
    ];

    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 3],
    ];

    (vertices, faces)
}

/// Split every face into four, deduplicating edge midpoints through a cache
/// so shared edges produce a single new vertex.
fn subdivide(vertices: &mut Vec<Point3f>, faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut midpoint_cache: HashMap<(usize, usize), usize> = HashMap::new();
    let mut next_faces = Vec::with_capacity(faces.len() * 4);

    let mut midpoint = |a: usize, b: usize, vertices: &mut Vec<Point3f>| -> usize {
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&idx) = midpoint_cache.get(&key) {
            return idx;
        }
        let mid = Point3f::from((vertices[a].coords + vertices[b].coords) * 0.5);
        vertices.push(mid);
        let idx = vertices.len() - 1;
        midpoint_cache.insert(key, idx);
        idx
    };

    for &[a, b, c] in faces {
        let ab = midpoint(a, b, vertices);
        let bc = midpoint(b, c, vertices);
        let ca = midpoint(c, a, vertices);

        next_faces.push([a, ab, ca]);
        next_faces.push([b, bc, ab]);
        next_faces.push([c, ca, bc]);
        next_faces.push([ab, bc, ca]);
    }

    next_faces
}
