use crate::error::Result;
use crate::types::profile::ApplicantProfile;
use crate::types::scoring::{Score, ScoreBreakdown, ScoreResult};

/// Linear rescale of a reference interval onto `[0, weight]`.
///
/// Values outside the interval extrapolate; nothing is clamped per term.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub weight: Score,
}

impl Band {
    pub const fn new(low: f64, high: f64, weight: Score) -> Self {
        Self { low, high, weight }
    }

    pub fn rescale(&self, value: f64) -> Score {
        ((value - self.low) / (self.high - self.low)) * self.weight
    }
}

pub const CGPA_BAND: Band = Band::new(6.5, 9.1, 25.0);
pub const COMMUNICATION_BAND: Band = Band::new(3.0, 4.8, 15.0);
pub const SKILLS_BAND: Band = Band::new(6.0, 9.0, 15.0);
pub const TWELFTH_BAND: Band = Band::new(55.0, 90.0, 5.0);
pub const TENTH_BAND: Band = Band::new(57.0, 88.0, 5.0);

pub const MAJOR_PROJECT_POINTS: Score = 5.0;
pub const MINI_PROJECT_POINTS: Score = 2.5;
pub const WORKSHOP_POINTS: Score = 3.33;
pub const INTERNSHIP_POINTS: Score = 10.0;
pub const HACKATHON_POINTS: Score = 5.0;
pub const BACKLOG_PENALTY: Score = 3.0;

pub fn compute_score(profile: &ApplicantProfile) -> Result<ScoreResult> {
    let breakdown = score_breakdown(profile)?;
    Ok(ScoreResult::from_total(breakdown.raw_total))
}

pub fn score_breakdown(profile: &ApplicantProfile) -> Result<ScoreBreakdown> {
    profile.validate()?;
    Ok(contributions(profile))
}

fn contributions(profile: &ApplicantProfile) -> ScoreBreakdown {
    let cgpa = CGPA_BAND.rescale(profile.cgpa);
    let communication = COMMUNICATION_BAND.rescale(profile.communication_score);
    let projects = f64::from(profile.major_projects) * MAJOR_PROJECT_POINTS
        + f64::from(profile.mini_projects) * MINI_PROJECT_POINTS;
    let skills = SKILLS_BAND.rescale(f64::from(profile.technical_skills_count));
    let workshops = f64::from(profile.workshops_attended) * WORKSHOP_POINTS;
    let twelfth = TWELFTH_BAND.rescale(profile.twelfth_percentage);
    let tenth = TENTH_BAND.rescale(profile.tenth_percentage);
    let internship = if profile.has_internship_experience {
        INTERNSHIP_POINTS
    } else {
        0.0
    };
    let hackathon = if profile.has_hackathon_experience {
        HACKATHON_POINTS
    } else {
        0.0
    };
    let backlog_penalty = -(f64::from(profile.backlogs) * BACKLOG_PENALTY);

    // Accumulate in a fixed order so results are reproducible bit-for-bit.
    let raw_total = [
        cgpa,
        communication,
        projects,
        skills,
        workshops,
        twelfth,
        tenth,
        internship,
        hackathon,
        backlog_penalty,
    ]
    .iter()
    .fold(0.0, |total, term| total + term);

    ScoreBreakdown {
        cgpa,
        communication,
        projects,
        skills,
        workshops,
        twelfth,
        tenth,
        internship,
        hackathon,
        backlog_penalty,
        raw_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlacementError;
    use crate::types::scoring::RiskTier;

    fn strong_profile() -> ApplicantProfile {
        ApplicantProfile {
            cgpa: 8.5,
            communication_score: 4.2,
            major_projects: 2,
            mini_projects: 1,
            technical_skills_count: 8,
            workshops_attended: 3,
            twelfth_percentage: 80.0,
            tenth_percentage: 75.0,
            backlogs: 0,
            has_hackathon_experience: true,
            has_internship_experience: true,
        }
    }

    fn weak_profile() -> ApplicantProfile {
        ApplicantProfile {
            cgpa: 5.0,
            communication_score: 0.0,
            major_projects: 0,
            mini_projects: 0,
            technical_skills_count: 0,
            workshops_attended: 0,
            twelfth_percentage: 0.0,
            tenth_percentage: 0.0,
            backlogs: 1,
            has_hackathon_experience: false,
            has_internship_experience: false,
        }
    }

    #[test]
    fn strong_profile_lands_in_high_tier() {
        let result = compute_score(&strong_profile()).expect("profile should score");
        assert!((result.score - 83.195).abs() < 0.001, "score {}", result.score);
        assert_eq!(result.tier, RiskTier::High);
    }

    #[test]
    fn backlogs_subtract_three_points_each() {
        let base = compute_score(&strong_profile()).expect("base should score");
        let with_backlogs = compute_score(&ApplicantProfile {
            backlogs: 5,
            ..strong_profile()
        })
        .expect("profile with backlogs should score");

        assert!((base.score - with_backlogs.score - 15.0).abs() < 1e-9);
        assert_eq!(with_backlogs.tier, RiskTier::Moderate);
    }

    #[test]
    fn weak_profile_clamps_to_zero() {
        let breakdown = score_breakdown(&weak_profile()).expect("profile should score");
        assert!(breakdown.raw_total < 0.0);

        let result = compute_score(&weak_profile()).expect("profile should score");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.tier, RiskTier::Low);
    }

    #[test]
    fn many_projects_clamp_to_one_hundred() {
        let result = compute_score(&ApplicantProfile {
            major_projects: 50,
            ..strong_profile()
        })
        .expect("profile should score");
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn band_endpoints_map_to_zero_and_weight() {
        assert_eq!(CGPA_BAND.rescale(6.5), 0.0);
        assert!((CGPA_BAND.rescale(9.1) - 25.0).abs() < 1e-9);
        assert_eq!(SKILLS_BAND.rescale(9.0), 15.0);
        assert_eq!(TWELFTH_BAND.rescale(90.0), 5.0);
    }

    #[test]
    fn terms_extrapolate_outside_reference_band() {
        let breakdown = score_breakdown(&ApplicantProfile {
            cgpa: 10.0,
            technical_skills_count: 2,
            ..strong_profile()
        })
        .expect("profile should score");

        assert!(breakdown.cgpa > CGPA_BAND.weight);
        assert!(breakdown.skills < 0.0);
    }

    #[test]
    fn breakdown_terms_sum_to_raw_total() {
        let breakdown = score_breakdown(&strong_profile()).expect("profile should score");
        let summed: f64 = breakdown.terms().iter().map(|(_, value)| value).sum();
        assert!((summed - breakdown.raw_total).abs() < 1e-9);
        assert_eq!(breakdown.internship, INTERNSHIP_POINTS);
        assert_eq!(breakdown.hackathon, HACKATHON_POINTS);
        assert_eq!(breakdown.projects, 12.5);
    }

    #[test]
    fn non_finite_profile_fails_before_scoring() {
        let result = compute_score(&ApplicantProfile {
            communication_score: f64::NAN,
            ..strong_profile()
        });
        assert!(matches!(
            result,
            Err(PlacementError::InvalidProfile {
                field: "communication_score",
                ..
            })
        ));
    }
}
