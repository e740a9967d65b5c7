use anyhow::Result;
use clap::Parser;
use file_bundle::{
    bundle,
    cli::Cli,
    config::Config,
    constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::from_parsed(cli)?;

    if config.sources.is_empty() {
        tracing::warn!("no source paths given; {} will be empty", config.output.display());
    }

    let report = bundle::save_bundle(&config.sources, &config.output)?;

    println!("Data saved to {}", config.output.display());
    eprintln!(
        "OK {} files, {} unreadable, ~{} tokens",
        report.blocks,
        report.unreadable.len(),
        report.tokens
    );
    Ok(())
}
