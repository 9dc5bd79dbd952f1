use crate::types::scoring::{RiskTier, Score, ScoreBreakdown, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    pub score: Score,
    pub percent: u8,
    pub tier: RiskTier,
    pub tier_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub recommendations: Vec<String>,
}

impl PlacementReport {
    pub fn new(
        result: ScoreResult,
        breakdown: ScoreBreakdown,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            score: result.score,
            percent: result.percent(),
            tier: result.tier,
            tier_label: result.tier.label(),
            breakdown: Some(breakdown),
            recommendations,
        }
    }
}
