//! hackterm binary entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hackterm::cli::Cli;
use hackterm::Config;

/// Install the log subscriber. Logs go to stderr so stdout stays readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from(&cli);
    hackterm::lifecycle::run(config).await
}
