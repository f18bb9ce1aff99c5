//! Binary crate for the `weatherbot` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and logging setup
//! - Interactive configuration
//! - Routing chat-style commands to the core

use clap::Parser;

mod chat;
mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.debug);
    cmd.run().await
}
