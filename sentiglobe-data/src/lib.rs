//! Sentiment data access for sentiglobe
//!
//! This crate owns the external data boundary: the one-shot fetch against
//! the sentiment endpoint, the built-in country registry, and the pure
//! validation step that turns raw code-to-score pairs into positioned
//! country samples.

pub mod countries;
pub mod error;
pub mod fetch;

pub use countries::{lookup, CountryInfo, COUNTRIES};
pub use error::*;
pub use fetch::{bundled_scores, fetch_scores, samples_from_scores, ScoreMap};
