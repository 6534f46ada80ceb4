//! Geographic coordinates and their mapping onto the reference sphere

use crate::point::Point3f;
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// out-of-range values are accepted and mapped without validation; they
/// simply land at a geographically meaningless spot on the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lat_deg: f32,
    pub lon_deg: f32,
}

impl GeoCoord {
    pub fn new(lat_deg: f32, lon_deg: f32) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Map this coordinate onto a sphere of the given radius.
    pub fn to_sphere(&self, radius: f32) -> Point3f {
        to_sphere(self.lat_deg, self.lon_deg, radius)
    }
}

/// Convert a latitude/longitude pair (degrees) to a point on a sphere of
/// radius `radius` centered at the origin.
///
/// Uses the geographic-to-spherical convention with colatitude
/// `phi = (90 - lat)` and azimuth `theta = (lon + 180)`:
///
/// ```text
/// x = -R * sin(phi) * cos(theta)
/// y =  R * cos(phi)
/// z =  R * sin(phi) * sin(theta)
/// ```
///
/// Pure and deterministic; the output magnitude equals `radius` for any
/// input pair.
pub fn to_sphere(lat_deg: f32, lon_deg: f32, radius: f32) -> Point3f {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    let x = -radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    Point3f::new(x, y, z)
}
