//! CLI entry point for the favicon fetcher.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod app;
mod cli;
mod output;

use app::terminal::{TerminalEnv, TerminalSettings};
use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let settings = TerminalSettings::resolve(&args, TerminalEnv::detect());
    settings.init_tracing();

    debug!(?args, ?settings, "CLI arguments parsed");

    app::run(&args, &settings).await
}
