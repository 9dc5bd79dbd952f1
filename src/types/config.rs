use crate::error::{PlacementError, Result};
use crate::report::OutputFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<String>,
    #[serde(default)]
    pub show_breakdown: bool,
}

impl PlacementConfig {
    pub fn output_format(&self) -> OutputFormat {
        self.report
            .format
            .as_deref()
            .and_then(OutputFormat::parse)
            .unwrap_or(OutputFormat::Md)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.report.format {
            if OutputFormat::parse(format).is_none() {
                return Err(PlacementError::ConfigParse(format!(
                    "unsupported report.format: {format} (expected \"md\" or \"json\")"
                )));
            }
        }
        Ok(())
    }
}
