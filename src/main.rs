use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let config = Cli::parse().into_config();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(EnvFilter::new(config.log_filter())),
        )
        .init();

    let outcome = psudohash_helper::run(config)?;
    tracing::debug!(?outcome, "run finished");
    Ok(())
}
