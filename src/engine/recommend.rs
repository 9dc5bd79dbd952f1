use crate::error::Result;
use crate::types::profile::ApplicantProfile;

pub const CGPA_TARGET: f64 = 7.5;
pub const SKILLS_TARGET: u32 = 7;
pub const COMMUNICATION_TARGET: f64 = 4.0;
pub const MAJOR_PROJECTS_TARGET: u32 = 2;
pub const WORKSHOPS_TARGET: u32 = 2;

/// A single improvement suggestion and the condition under which it applies.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    predicate: fn(&ApplicantProfile) -> bool,
}

impl Rule {
    pub fn applies(&self, profile: &ApplicantProfile) -> bool {
        (self.predicate)(profile)
    }
}

/// Evaluated top to bottom; output order follows this table.
pub static RULES: [Rule; 8] = [
    Rule {
        id: "cgpa.low",
        message: "Focus on improving your CGPA - aim for 7.5+ to significantly boost placement chances",
        predicate: cgpa_below_target,
    },
    Rule {
        id: "skills.narrow",
        message: "Develop more technical skills - target 6-8 diverse programming languages and tools",
        predicate: skills_below_target,
    },
    Rule {
        id: "internship.missing",
        message: "Gain internship experience - it can increase placement probability by up to 70%",
        predicate: lacks_internship,
    },
    Rule {
        id: "communication.low",
        message: "Improve communication skills through practice, training, and mock interviews",
        predicate: communication_below_target,
    },
    Rule {
        id: "backlogs.pending",
        message: "Clear all backlogs as soon as possible - they significantly impact placement chances",
        predicate: has_backlogs,
    },
    Rule {
        id: "projects.few",
        message: "Work on major projects to showcase your technical capabilities and problem-solving skills",
        predicate: major_projects_below_target,
    },
    Rule {
        id: "workshops.few",
        message: "Attend more workshops and obtain certifications to enhance your profile",
        predicate: workshops_below_target,
    },
    Rule {
        id: "hackathon.missing",
        message: "Participate in hackathons to demonstrate innovation and teamwork abilities",
        predicate: lacks_hackathon,
    },
];

/// Returned in place of an empty list when no rule applies.
pub const FALLBACK: [&str; 3] = [
    "Excellent profile! Continue maintaining your strong performance",
    "Focus on leadership roles and advanced technical projects",
    "Build your professional network through LinkedIn and industry events",
];

fn cgpa_below_target(profile: &ApplicantProfile) -> bool {
    profile.cgpa < CGPA_TARGET
}

fn skills_below_target(profile: &ApplicantProfile) -> bool {
    profile.technical_skills_count < SKILLS_TARGET
}

fn lacks_internship(profile: &ApplicantProfile) -> bool {
    !profile.has_internship_experience
}

fn communication_below_target(profile: &ApplicantProfile) -> bool {
    profile.communication_score < COMMUNICATION_TARGET
}

fn has_backlogs(profile: &ApplicantProfile) -> bool {
    profile.backlogs > 0
}

fn major_projects_below_target(profile: &ApplicantProfile) -> bool {
    profile.major_projects < MAJOR_PROJECTS_TARGET
}

fn workshops_below_target(profile: &ApplicantProfile) -> bool {
    profile.workshops_attended < WORKSHOPS_TARGET
}

fn lacks_hackathon(profile: &ApplicantProfile) -> bool {
    !profile.has_hackathon_experience
}

pub fn rules() -> &'static [Rule] {
    &RULES
}

pub fn fired_rules(profile: &ApplicantProfile) -> impl Iterator<Item = &'static Rule> + '_ {
    RULES.iter().filter(move |rule| rule.applies(profile))
}

/// Fails with `InvalidProfile` on non-finite input before any rule is evaluated.
pub fn generate_recommendations(profile: &ApplicantProfile) -> Result<Vec<String>> {
    profile.validate()?;
    let recommendations = fired_rules(profile)
        .map(|rule| rule.message.to_string())
        .collect::<Vec<_>>();

    if recommendations.is_empty() {
        Ok(FALLBACK.iter().map(|message| message.to_string()).collect())
    } else {
        Ok(recommendations)
    }
}
