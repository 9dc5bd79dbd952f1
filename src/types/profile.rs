use crate::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};

/// Validated applicant attributes consumed by the scoring and recommendation engines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplicantProfile {
    pub cgpa: f64,
    pub communication_score: f64,
    pub major_projects: u32,
    pub mini_projects: u32,
    pub technical_skills_count: u32,
    pub workshops_attended: u32,
    pub twelfth_percentage: f64,
    pub tenth_percentage: f64,
    pub backlogs: u32,
    pub has_hackathon_experience: bool,
    pub has_internship_experience: bool,
}

impl ApplicantProfile {
    /// Counts are non-negative by type, so only the decimal fields need checking.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("cgpa", self.cgpa),
            ("communication_score", self.communication_score),
            ("twelfth_percentage", self.twelfth_percentage),
            ("tenth_percentage", self.tenth_percentage),
        ] {
            if !value.is_finite() {
                return Err(PlacementError::invalid(
                    field,
                    format!("must be a finite number (found {value})"),
                ));
            }
        }
        Ok(())
    }
}

/// Raw field values as collected from a profile document or command-line flags.
///
/// Every field is optional and counts are signed so that missing and negative
/// input survive until [`ProfileInput::into_profile`] rejects them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileInput {
    pub cgpa: Option<f64>,
    #[serde(alias = "communicationScore", alias = "communication")]
    pub communication_score: Option<f64>,
    #[serde(alias = "majorProjects")]
    pub major_projects: Option<i64>,
    #[serde(alias = "miniProjects")]
    pub mini_projects: Option<i64>,
    #[serde(alias = "technicalSkillsCount", alias = "skills")]
    pub technical_skills_count: Option<i64>,
    #[serde(alias = "workshopsAttended", alias = "workshops")]
    pub workshops_attended: Option<i64>,
    #[serde(alias = "twelfthPercentage", alias = "twelfth")]
    pub twelfth_percentage: Option<f64>,
    #[serde(alias = "tenthPercentage", alias = "tenth")]
    pub tenth_percentage: Option<f64>,
    pub backlogs: Option<i64>,
    #[serde(alias = "hasHackathonExperience", alias = "hackathon")]
    pub has_hackathon_experience: Option<bool>,
    #[serde(alias = "hasInternshipExperience", alias = "internship")]
    pub has_internship_experience: Option<bool>,
}

impl ProfileInput {
    /// Fields set in `other` win over fields set in `self`.
    pub fn overlay(self, other: ProfileInput) -> ProfileInput {
        ProfileInput {
            cgpa: other.cgpa.or(self.cgpa),
            communication_score: other.communication_score.or(self.communication_score),
            major_projects: other.major_projects.or(self.major_projects),
            mini_projects: other.mini_projects.or(self.mini_projects),
            technical_skills_count: other
                .technical_skills_count
                .or(self.technical_skills_count),
            workshops_attended: other.workshops_attended.or(self.workshops_attended),
            twelfth_percentage: other.twelfth_percentage.or(self.twelfth_percentage),
            tenth_percentage: other.tenth_percentage.or(self.tenth_percentage),
            backlogs: other.backlogs.or(self.backlogs),
            has_hackathon_experience: other
                .has_hackathon_experience
                .or(self.has_hackathon_experience),
            has_internship_experience: other
                .has_internship_experience
                .or(self.has_internship_experience),
        }
    }

    pub fn into_profile(self) -> Result<ApplicantProfile> {
        let profile = ApplicantProfile {
            cgpa: required("cgpa", self.cgpa)?,
            communication_score: required("communication_score", self.communication_score)?,
            major_projects: count("major_projects", self.major_projects)?,
            mini_projects: count("mini_projects", self.mini_projects)?,
            technical_skills_count: count("technical_skills_count", self.technical_skills_count)?,
            workshops_attended: count("workshops_attended", self.workshops_attended)?,
            twelfth_percentage: required("twelfth_percentage", self.twelfth_percentage)?,
            tenth_percentage: required("tenth_percentage", self.tenth_percentage)?,
            backlogs: count("backlogs", self.backlogs)?,
            has_hackathon_experience: required(
                "has_hackathon_experience",
                self.has_hackathon_experience,
            )?,
            has_internship_experience: required(
                "has_internship_experience",
                self.has_internship_experience,
            )?,
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| PlacementError::invalid(field, "is missing"))
}

fn count(field: &'static str, value: Option<i64>) -> Result<u32> {
    let value = required(field, value)?;
    if value < 0 {
        return Err(PlacementError::invalid(
            field,
            format!("must be non-negative (found {value})"),
        ));
    }
    u32::try_from(value)
        .map_err(|_| PlacementError::invalid(field, format!("is out of range (found {value})")))
}
