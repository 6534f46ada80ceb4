//! Country registry
//!
//! Maps ISO 3166-1 alpha-3 codes to a display name and a representative
//! geographic coordinate (roughly the country's centroid). Scores arriving
//! for codes not in this table are dropped during validation.

use sentiglobe_core::GeoCoord;

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub lat_deg: f32,
    pub lon_deg: f32,
}

impl CountryInfo {
    pub fn coord(&self) -> GeoCoord {
        GeoCoord::new(self.lat_deg, self.lon_deg)
    }
}

/// The built-in registry, sorted by code for binary search.
pub const COUNTRIES: &[CountryInfo] = &[
    CountryInfo { code: "ARG", name: "Argentina", lat_deg: -38.4, lon_deg: -63.6 },
    CountryInfo { code: "AUS", name: "Australia", lat_deg: -25.3, lon_deg: 133.8 },
    CountryInfo { code: "BRA", name: "Brazil", lat_deg: -14.2, lon_deg: -51.9 },
    CountryInfo { code: "CAN", name: "Canada", lat_deg: 56.1, lon_deg: -106.3 },
    CountryInfo { code: "CHE", name: "Switzerland", lat_deg: 46.8, lon_deg: 8.2 },
    CountryInfo { code: "CHN", name: "China", lat_deg: 35.9, lon_deg: 104.2 },
    CountryInfo { code: "DEU", name: "Germany", lat_deg: 51.2, lon_deg: 10.4 },
    CountryInfo { code: "EGY", name: "Egypt", lat_deg: 26.8, lon_deg: 30.8 },
    CountryInfo { code: "ESP", name: "Spain", lat_deg: 40.5, lon_deg: -3.7 },
    CountryInfo { code: "FRA", name: "France", lat_deg: 46.2, lon_deg: 2.2 },
    CountryInfo { code: "GBR", name: "United Kingdom", lat_deg: 55.4, lon_deg: -3.4 },
    CountryInfo { code: "IDN", name: "Indonesia", lat_deg: -0.8, lon_deg: 113.9 },
    CountryInfo { code: "IND", name: "India", lat_deg: 20.6, lon_deg: 79.0 },
    CountryInfo { code: "ITA", name: "Italy", lat_deg: 41.9, lon_deg: 12.6 },
    CountryInfo { code: "JPN", name: "Japan", lat_deg: 36.2, lon_deg: 138.3 },
    CountryInfo { code: "KEN", name: "Kenya", lat_deg: -0.0, lon_deg: 37.9 },
    CountryInfo { code: "KOR", name: "South Korea", lat_deg: 35.9, lon_deg: 127.8 },
    CountryInfo { code: "MEX", name: "Mexico", lat_deg: 23.6, lon_deg: -102.6 },
    CountryInfo { code: "NGA", name: "Nigeria", lat_deg: 9.1, lon_deg: 8.7 },
    CountryInfo { code: "NLD", name: "Netherlands", lat_deg: 52.1, lon_deg: 5.3 },
    CountryInfo { code: "NOR", name: "Norway", lat_deg: 60.5, lon_deg: 8.5 },
    CountryInfo { code: "NZL", name: "New Zealand", lat_deg: -40.9, lon_deg: 174.9 },
    CountryInfo { code: "POL", name: "Poland", lat_deg: 51.9, lon_deg: 19.1 },
    CountryInfo { code: "RUS", name: "Russia", lat_deg: 61.5, lon_deg: 105.3 },
    CountryInfo { code: "SAU", name: "Saudi Arabia", lat_deg: 23.9, lon_deg: 45.1 },
    CountryInfo { code: "SWE", name: "Sweden", lat_deg: 60.1, lon_deg: 18.6 },
    CountryInfo { code: "TUR", name: "Turkey", lat_deg: 38.96, lon_deg: 35.2 },
    CountryInfo { code: "USA", name: "United States", lat_deg: 39.8, lon_deg: -98.6 },
    CountryInfo { code: "ZAF", name: "South Africa", lat_deg: -30.6, lon_deg: 22.9 },
];

/// Look up a country by alpha-3 code (case sensitive, uppercase).
pub fn lookup(code: &str) -> Option<&'static CountryInfo> {
    COUNTRIES
        .binary_search_by(|info| info.code.cmp(code))
        .ok()
        .map(|idx| &COUNTRIES[idx])
}
