//! Country samples: the sparse inputs to the displacement field

use crate::error::Error;
use crate::geo::GeoCoord;
use crate::point::Point3f;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ISO 3166-1 alpha-3 country code, stored as three uppercase ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 3]);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        // Constructed only from validated ASCII uppercase bytes
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for CountryCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidData(format!(
                "country code must be three ASCII letters, got {s:?}"
            )));
        }
        let mut code = [0u8; 3];
        for (dst, src) in code.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(code))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One country's contribution to the displacement field: its code, its
/// sentiment score, and its fixed anchor position on the reference sphere.
///
/// Scores are roughly in [-1, 1] but unbounded; positions are derived from
/// the country's geographic coordinate once per data fetch and are immutable
/// until the next fetch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountrySample {
    pub code: CountryCode,
    pub score: f32,
    pub position: Point3f,
}

impl CountrySample {
    /// Build a sample by mapping the country's coordinate onto the sphere.
    pub fn from_geo(code: CountryCode, score: f32, coord: GeoCoord, radius: f32) -> Self {
        Self {
            code,
            score,
            position: coord.to_sphere(radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_and_uppercases_codes() {
        let code: CountryCode = "usa".parse().unwrap();
        assert_eq!(code.as_str(), "USA");
        assert_eq!(code.to_string(), "USA");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!("US".parse::<CountryCode>().is_err());
        assert!("USAX".parse::<CountryCode>().is_err());
        assert!("U1A".parse::<CountryCode>().is_err());
        assert!("".parse::<CountryCode>().is_err());
    }

    #[test]
    fn sample_position_lies_on_sphere() {
        let code: CountryCode = "FRA".parse().unwrap();
        let sample = CountrySample::from_geo(code, 0.4, GeoCoord::new(46.2, 2.2), 5.0);
        assert_relative_eq!(sample.position.coords.norm(), 5.0, epsilon = 1e-4);
    }
}
