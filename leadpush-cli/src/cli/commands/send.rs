//! Send command: the full read -> validate -> submit pipeline

use anyhow::{Context, Result, bail};
use colored::*;

use crate::batch::{BatchDriver, BatchReport, FailurePolicy, progress_channel};
use crate::cli::SendArgs;
use crate::ingest::{read_rows, require_valid};
use crate::relay::{HttpRelayClient, RelayConfig};

/// Environment variable consulted when --relay-url is not given.
const RELAY_URL_ENV: &str = "LEADPUSH_RELAY_URL";

pub async fn handle_send_command(args: SendArgs) -> Result<()> {
    let relay_url = resolve_relay_url(args.relay_url)?;

    let rows = read_rows(&args.file)?;
    let valid = require_valid(rows)?;

    println!(
        "Submitting {} records from {} to {}",
        valid.len().to_string().bold(),
        args.file.display(),
        relay_url.cyan()
    );

    let policy = if args.fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::ContinueOnError
    };
    let relay = HttpRelayClient::new(RelayConfig::new(relay_url));
    let driver = BatchDriver::new(relay, policy);

    let (progress_tx, mut progress_rx) = progress_channel(valid.len());
    let printer = tokio::spawn(async move {
        while progress_rx.changed().await.is_ok() {
            let progress = *progress_rx.borrow_and_update();
            println!(
                "{:>3}% ({}/{})",
                progress.percent, progress.completed, progress.total
            );
        }
    });

    let report = driver.run(&valid, &progress_tx).await;

    drop(progress_tx);
    let _ = printer.await;

    print_summary(&report);
    if report.aborted {
        bail!(
            "stopped after the first failure ({} of {} records submitted)",
            report.succeeded + report.failed(),
            report.total
        );
    }
    if !report.failures.is_empty() {
        bail!("{} of {} records failed", report.failed(), report.total);
    }
    Ok(())
}

fn resolve_relay_url(flag: Option<String>) -> Result<String> {
    match flag {
        Some(url) => Ok(url),
        None => std::env::var(RELAY_URL_ENV).with_context(|| {
            format!(
                "no relay endpoint configured: pass --relay-url or set {}",
                RELAY_URL_ENV
            )
        }),
    }
}

fn print_summary(report: &BatchReport) {
    println!();
    if report.all_succeeded() {
        println!(
            "{} all {} records sent",
            "OK".bright_green().bold(),
            report.total
        );
        return;
    }

    println!(
        "{} succeeded: {}, failed: {}",
        "DONE".yellow().bold(),
        report.succeeded,
        report.failed()
    );
    for failure in &report.failures {
        println!(
            "  row {} ({}): {}",
            failure.index + 1,
            failure.email,
            failure.reason.red()
        );
    }
}
