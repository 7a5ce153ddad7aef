use eyre::{Context, Result};
use featpp::Preprocessor;
use featpp::build::Builder;
use featpp::cli::Cli;
use featpp::config::Config;
use featpp::output::get_formatter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse_or_exit();
    init_logging(cli.verbose);

    // Load configuration
    let config = Config::load(cli.config.as_ref(), &cli.source)
        .context("Failed to load configuration")?;

    let features = cli.get_features();
    log::debug!("Enabled features: {:?}", features);

    let builder = Builder::new(config, Preprocessor::new(features)).dry_run(cli.dry_run);
    let report = builder
        .build(&cli.source, &cli.out)
        .context("Build failed")?;

    let formatter = get_formatter(&cli.format);
    println!("{}", formatter.format_report(&report));

    Ok(())
}

/// Log to stderr at `info`, or `debug` when verbose; `RUST_LOG` takes precedence
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
