mod cli;
mod application;
mod domain;
mod data;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Used when RUST_LOG is unset or unparsable
const DEFAULT_LOG_FILTER: &str = "fasttext_prep=info";

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    cli.run()
}

/// RUST_LOG wins outright when set; it is never merged with the default,
/// so `RUST_LOG=fasttext_prep=debug` really does enable debug output.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
