pub mod human;
pub mod json;

use crate::build::BuildReport;
use crate::cli::OutputFormat;

/// Trait for formatting a build summary
pub trait OutputFormatter {
    /// Format the report for output
    fn format_report(&self, report: &BuildReport) -> String;
}

/// Get the appropriate formatter for the given format
pub fn get_formatter(format: &OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(human::HumanFormatter::new()),
        OutputFormat::Json => Box::new(json::JsonFormatter::new()),
    }
}

/// Pluralize a count, e.g. `1 file` / `3 files`
pub(crate) fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}
