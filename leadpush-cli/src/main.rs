//! leadpush: bulk-import lead spreadsheets into a partner intake API
//!
//! Reads an Excel file, keeps the rows that carry an email address,
//! shapes each one into the partner's fixed intake record and submits
//! them sequentially through a relay endpoint.

mod batch;
mod cli;
mod error;
mod ingest;
mod payload;
mod relay;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, commands};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Send(args) => commands::handle_send_command(args).await,
        Commands::Preview(args) => commands::handle_preview_command(args),
    }
}
