//! Sentiment data fetch
//!
//! Two-phase contract: `fetch_scores` does the one-shot network I/O and
//! returns raw code-to-score pairs; `samples_from_scores` is the pure
//! validation step that resolves codes against the registry and maps them
//! onto the sphere. Keeping the phases apart means everything after the
//! socket is testable offline.

use crate::countries;
use crate::error::{DataError, Result};
use sentiglobe_core::{CountryCode, CountrySample};
use std::collections::HashMap;

/// Raw response body: alpha-3 code to sentiment score.
pub type ScoreMap = HashMap<String, f32>;

/// Fetch the score map from the sentiment endpoint.
///
/// One GET, no auth, no retry. A non-success status is an error; the caller
/// leaves the field in its neutral state and reports once.
pub fn fetch_scores(url: &str) -> Result<ScoreMap> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    let scores: ScoreMap = serde_json::from_str(&body)?;
    Ok(scores)
}

/// Bundled offline score set, used by demos when no endpoint is reachable.
pub fn bundled_scores() -> ScoreMap {
    let raw = include_str!("../data/sample_scores.json");
    // The bundled file is part of the crate; a parse failure is a build
    // defect, not a runtime condition.
    serde_json::from_str(raw).unwrap_or_default()
}

/// Validate raw scores into country samples on a sphere of radius `radius`.
///
/// Scores for codes missing from the registry (or not alpha-3 shaped at
/// all) are dropped, not errors. Output is sorted by code so the sample
/// order, and with it the field build, is deterministic across fetches.
pub fn samples_from_scores(scores: &ScoreMap, radius: f32) -> Vec<CountrySample> {
    let mut samples: Vec<CountrySample> = scores
        .iter()
        .filter_map(|(raw_code, &score)| {
            let code: CountryCode = match raw_code.parse() {
                Ok(code) => code,
                Err(_) => {
                    log::warn!("dropping malformed country code {raw_code:?}");
                    return None;
                }
            };
            let Some(info) = countries::lookup(code.as_str()) else {
                log::warn!("dropping unknown country code {code}");
                return None;
            };
            Some(CountrySample::from_geo(code, score, info.coord(), radius))
        })
        .collect();

    samples.sort_by_key(|s| s.code);
    samples
}
