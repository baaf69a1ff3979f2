use std::io;

use anyhow::{Context, Result};
use blokus_protocol::{CONFIG_ENV_VAR, Config, DEFAULT_CONFIG_PATH, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout is the protocol channel; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load_or_default(&path);
    info!(
        config = %path,
        budget_secs = config.search.time_budget_secs,
        max_depth = config.search.max_depth,
        "blokus agent starting"
    );

    let mut session = Session::new(config.search);
    blokus_protocol::run(&mut session, io::stdin().lock(), io::stdout().lock())
        .context("client loop failed")?;
    info!("blokus agent exiting");
    Ok(())
}
