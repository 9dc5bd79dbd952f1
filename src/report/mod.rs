pub mod json;
pub mod md;

use crate::error::PlacementError;
use crate::types::report::PlacementReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "md" | "markdown" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render(report: &PlacementReport, format: OutputFormat) -> Result<String, PlacementError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PlacementError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
