//! Sequential submission driver
//!
//! Iterates validated rows strictly in order, one outstanding relay
//! call at a time: row `i + 1` is not submitted until row `i`'s call
//! has resolved. A failed record is recorded in the report and, under
//! the default policy, does not stop the rest of the batch.

use log::{debug, warn};

use super::progress::{BatchProgress, ProgressSender};
use crate::ingest::ValidatedRow;
use crate::payload::SubmissionPayload;
use crate::relay::RelayClient;

/// What to do with the rest of a batch once one record has failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next row.
    #[default]
    ContinueOnError,
    /// Stop submitting after the first failed row.
    FailFast,
}

/// One failed record within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Zero-based index into the validated row sequence.
    pub index: usize,
    /// Identifier of the failing record.
    pub email: String,
    pub reason: String,
}

/// Aggregate outcome of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<RecordFailure>,
    /// True when a fail-fast policy cut the run short.
    pub aborted: bool,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty() && !self.aborted
    }
}

/// Drives one batch through the relay.
pub struct BatchDriver<R: RelayClient> {
    relay: R,
    policy: FailurePolicy,
}

impl<R: RelayClient> BatchDriver<R> {
    pub fn new(relay: R, policy: FailurePolicy) -> Self {
        Self { relay, policy }
    }

    /// Submit every row, updating `progress` after each known outcome.
    ///
    /// The caller guarantees `rows` is non-empty (an empty validated
    /// set short-circuits before a driver is ever built).
    pub async fn run(&self, rows: &[ValidatedRow], progress: &ProgressSender) -> BatchReport {
        let total = rows.len();
        let mut report = BatchReport {
            total,
            ..Default::default()
        };

        for (index, row) in rows.iter().enumerate() {
            let payload = SubmissionPayload::from_row(row);
            match self.relay.submit(&payload).await {
                Ok(()) => {
                    debug!("record {}/{} sent ({})", index + 1, total, row.email());
                    report.succeeded += 1;
                }
                Err(err) => {
                    warn!(
                        "record {}/{} failed ({}): {}",
                        index + 1,
                        total,
                        row.email(),
                        err
                    );
                    report.failures.push(RecordFailure {
                        index,
                        email: row.email().to_string(),
                        reason: err.to_string(),
                    });
                    if self.policy == FailurePolicy::FailFast {
                        report.aborted = true;
                        publish(progress, index + 1, &report);
                        return report;
                    }
                }
            }
            publish(progress, index + 1, &report);
        }

        report
    }
}

fn publish(progress: &ProgressSender, completed: usize, report: &BatchReport) {
    progress.send_replace(BatchProgress {
        completed,
        total: report.total,
        percent: BatchProgress::percent_of(completed, report.total),
        succeeded: report.succeeded,
        failed: report.failures.len(),
    });
}
