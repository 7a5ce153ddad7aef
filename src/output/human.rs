use super::{OutputFormatter, count};
use crate::build::BuildReport;
use colored::Colorize;

/// Human-readable output formatter
#[derive(Debug, Default)]
pub struct HumanFormatter {
    use_colors: bool,
}

impl HumanFormatter {
    /// Create a new human formatter; `colored` decides whether the terminal gets colors
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a new human formatter with explicit color setting
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_path(&self, path: &std::path::Path) -> String {
        let text = format!("\"{}\"", path.display());
        if self.use_colors {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn format_features(&self, features: &[String]) -> String {
        if features.is_empty() {
            let text = "(none)";
            return if self.use_colors {
                text.dimmed().to_string()
            } else {
                text.to_string()
            };
        }

        let text = features.join(", ");
        if self.use_colors {
            text.cyan().to_string()
        } else {
            text
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &BuildReport) -> String {
        let verb = if report.dry_run { "Checked" } else { "Built" };
        let headline = format!(
            "{} from {} → {} with features: {}",
            verb,
            self.format_path(&report.source),
            self.format_path(&report.destination),
            self.format_features(&report.features)
        );

        let summary = format!(
            "  {} preprocessed, {} copied, {} skipped",
            count(report.processed, "file", "files"),
            count(report.copied, "file", "files"),
            count(report.skipped, "entry", "entries")
        );

        let mut output = vec![headline, summary];
        if report.dry_run {
            let note = "  dry run: nothing was written";
            output.push(if self.use_colors {
                note.yellow().to_string()
            } else {
                note.to_string()
            });
        }

        output.join("\n")
    }
}
