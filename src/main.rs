//! Iron Pulse - cohort roster administration CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iron_pulse::cli::Cli;

/// Initialize tracing on stderr so stdout stays clean for tables and JSON.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "iron_pulse=debug" } else { "iron_pulse=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()?;
    Ok(())
}
