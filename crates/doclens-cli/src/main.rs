//! Doclens CLI - LLM Document Analysis
//!
//! Serve the analyzer web front end, or analyze a document straight from
//! the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing. `--verbose` upgrades the default filter to debug,
/// including HTTP request traces; `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "doclens=debug,doclens_llm=debug,doclens_web=debug,tower_http=debug"
    } else {
        "doclens=info,doclens_llm=info,doclens_web=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
