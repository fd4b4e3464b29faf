//! Preview command: dry run without any network traffic

use anyhow::Result;
use colored::*;

use crate::cli::PreviewArgs;
use crate::ingest::{read_rows, require_valid};

pub fn handle_preview_command(args: PreviewArgs) -> Result<()> {
    let rows = read_rows(&args.file)?;
    let total = rows.len();
    let valid = require_valid(rows)?;

    println!(
        "{} of {} rows would be submitted ({} dropped for a missing email)",
        valid.len().to_string().bright_green().bold(),
        total,
        total - valid.len()
    );
    for (index, row) in valid.iter().enumerate() {
        println!("  {:>4}. {}", index + 1, row.email());
    }
    Ok(())
}
