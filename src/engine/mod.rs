//! Placement scoring and recommendation engine.
//!
//! Pure functions over an [`ApplicantProfile`]: no I/O, no logging, no shared state.

pub mod recommend;
pub mod scoring;

use crate::error::Result;
use crate::types::profile::ApplicantProfile;
use crate::types::report::PlacementReport;
use crate::types::scoring::ScoreResult;

pub use recommend::generate_recommendations;
pub use scoring::compute_score;

pub fn evaluate(profile: &ApplicantProfile) -> Result<PlacementReport> {
    let breakdown = scoring::score_breakdown(profile)?;
    let result = ScoreResult::from_total(breakdown.raw_total);
    let recommendations = recommend::generate_recommendations(profile)?;
    Ok(PlacementReport::new(result, breakdown, recommendations))
}
