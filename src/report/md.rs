use crate::types::report::PlacementReport;

pub fn to_markdown(report: &PlacementReport) -> String {
    let mut output = String::new();
    output.push_str("# Placement Report\n\n");
    output.push_str(&format!(
        "Score: {}% ({:.2})\n\nTier: {} [{}]\n\n",
        report.percent,
        report.score,
        report.tier_label,
        report.tier.badge_class()
    ));

    if let Some(breakdown) = &report.breakdown {
        output.push_str("## Score Breakdown\n\n");
        output.push_str("| term | points |\n|---|---|\n");
        for (name, points) in breakdown.terms() {
            output.push_str(&format!("| {name} | {points:.2} |\n"));
        }
        output.push_str(&format!("| total (unclamped) | {:.2} |\n\n", breakdown.raw_total));
    }

    output.push_str("## Recommendations\n\n");
    for (index, recommendation) in report.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, recommendation));
    }

    output
}
