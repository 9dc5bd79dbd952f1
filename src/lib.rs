//! Placement likelihood scoring.
//!
//! Maps an applicant profile to a bounded score with a risk tier and an
//! ordered list of improvement suggestions.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use engine::{compute_score, evaluate, generate_recommendations};
pub use error::{PlacementError, Result};
pub use types::profile::{ApplicantProfile, ProfileInput};
pub use types::report::PlacementReport;
pub use types::scoring::{RiskTier, ScoreBreakdown, ScoreResult};
