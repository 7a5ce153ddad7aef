use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the build summary
#[derive(Debug, Clone, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON format for machine processing
    Json,
}

/// Command-line interface for the featpp preprocessor
#[derive(Parser)]
#[command(
    name = "featpp",
    about = "Build a feature-gated copy of a source tree from #if/#else/#endif comment directives",
    version = env!("CARGO_PKG_VERSION"),
    after_help = "Example:\n  featpp project dist FEATURE_CHAT,FEATURE_AUTH"
)]
pub struct Cli {
    /// Source directory to read from
    #[arg(value_name = "SOURCE_DIR")]
    pub source: PathBuf,

    /// Output directory; removed and recreated on every build
    #[arg(value_name = "OUT_DIR")]
    pub out: PathBuf,

    /// Enabled features
    #[arg(value_name = "FEATURES", help = "Enabled features (comma-separated)")]
    pub features: String,

    /// Configuration file path
    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Summary output format")]
    pub format: OutputFormat,

    /// Validate without writing
    #[arg(long, help = "Preprocess every file but write nothing")]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Parse arguments, exiting with status 0 for help/version and 1 for usage errors
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
            Err(e) => {
                // Printing can only fail if stderr is gone
                let _ = e.print();
                std::process::exit(1);
            }
        }
    }

    /// Parse enabled features from the comma-separated argument
    pub fn get_features(&self) -> Vec<String> {
        self.features
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}


// Provide a default implementation for testing
impl Default for Cli {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            out: PathBuf::from("dist"),
            features: String::new(),
            config: None,
            format: OutputFormat::default(),
            dry_run: false,
            verbose: false,
        }
    }
}
