use super::OutputFormatter;
use crate::build::BuildReport;

/// JSON output formatter
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &BuildReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e)
        })
    }
}
