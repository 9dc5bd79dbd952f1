use crate::types::report::PlacementReport;

pub fn to_json(report: &PlacementReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::types::profile::ApplicantProfile;

    fn report() -> PlacementReport {
        engine::evaluate(&ApplicantProfile {
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
        })
        .expect("profile should evaluate")
    }

    #[test]
    fn json_report_contains_score_and_tier() {
        let rendered = to_json(&report()).expect("json should serialize");
        assert!(rendered.contains("\"percent\": 83"));
        assert!(rendered.contains("\"tier\": \"high\""));
        assert!(rendered.contains("\"breakdown\""));
    }

    #[test]
    fn json_report_omits_breakdown_when_cleared() {
        let mut report = report();
        report.breakdown = None;

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json should parse");
        assert!(value.get("breakdown").is_none());
        assert_eq!(
            value["recommendations"].as_array().map(Vec::len),
            Some(3)
        );
    }
}
