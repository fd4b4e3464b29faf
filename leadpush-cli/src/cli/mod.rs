//! Command-line interface definitions

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "leadpush",
    about = "Bulk-import a lead spreadsheet into the partner intake API",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse, validate and submit every row of a spreadsheet
    Send(SendArgs),
    /// Parse and validate only; report what would be submitted
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct SendArgs {
    /// Path to the Excel file (.xlsx or .xls)
    pub file: PathBuf,

    /// Relay endpoint receiving one record per POST
    /// (falls back to the LEADPUSH_RELAY_URL environment variable)
    #[arg(long)]
    pub relay_url: Option<String>,

    /// Stop at the first failed record instead of continuing
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the Excel file (.xlsx or .xls)
    pub file: PathBuf,
}
