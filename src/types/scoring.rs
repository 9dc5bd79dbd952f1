use serde::Serialize;

pub type Score = f64;

pub const SCORE_FLOOR: Score = 0.0;
pub const SCORE_CEILING: Score = 100.0;
pub const HIGH_TIER_THRESHOLD: Score = 70.0;
pub const MODERATE_TIER_THRESHOLD: Score = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Each band is inclusive at its lower bound.
    pub fn from_score(score: Score) -> Self {
        if score >= HIGH_TIER_THRESHOLD {
            RiskTier::High
        } else if score >= MODERATE_TIER_THRESHOLD {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::High => "High Placement Probability",
            RiskTier::Moderate => "Moderate Placement Probability",
            RiskTier::Low => "Low Placement Probability",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            RiskTier::High => "high",
            RiskTier::Moderate => "medium",
            RiskTier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    pub tier: RiskTier,
}

impl ScoreResult {
    pub fn from_total(raw_total: Score) -> Self {
        let score = raw_total.clamp(SCORE_FLOOR, SCORE_CEILING);
        Self {
            score,
            tier: RiskTier::from_score(score),
        }
    }

    /// Score rounded for the percentage label; the tier is derived from the unrounded score.
    pub fn percent(&self) -> u8 {
        self.score.round() as u8
    }
}

/// Signed per-term contributions, kept separate so each can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub cgpa: Score,
    pub communication: Score,
    pub projects: Score,
    pub skills: Score,
    pub workshops: Score,
    pub twelfth: Score,
    pub tenth: Score,
    pub internship: Score,
    pub hackathon: Score,
    pub backlog_penalty: Score,
    pub raw_total: Score,
}

impl ScoreBreakdown {
    pub fn academic_history(&self) -> Score {
        self.twelfth + self.tenth
    }

    pub fn terms(&self) -> [(&'static str, Score); 9] {
        [
            ("cgpa", self.cgpa),
            ("communication", self.communication),
            ("projects", self.projects),
            ("skills", self.skills),
            ("workshops", self.workshops),
            ("academic_history", self.academic_history()),
            ("internship", self.internship),
            ("hackathon", self.hackathon),
            ("backlogs", self.backlog_penalty),
        ]
    }
}
