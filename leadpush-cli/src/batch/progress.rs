//! Observable progress for one batch run
//!
//! The driver owns the state and publishes a snapshot after every
//! completed record; observers hold the receiving end of a watch
//! channel and either poll it or await changes.

use tokio::sync::watch;

/// Snapshot of a batch run after some number of completed records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchProgress {
    /// Records whose outcome (success or failure) is known.
    pub completed: usize,
    /// Records in the batch.
    pub total: usize,
    /// Rounded completion percentage, 0..=100.
    pub percent: u8,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchProgress {
    /// `round(100 * completed / total)` as the operator sees it.
    pub fn percent_of(completed: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        (100.0 * completed as f64 / total as f64).round() as u8
    }

    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub type ProgressSender = watch::Sender<BatchProgress>;
pub type ProgressReceiver = watch::Receiver<BatchProgress>;

/// Channel pair for one batch of `total` records, starting at zero
/// completed.
pub fn progress_channel(total: usize) -> (ProgressSender, ProgressReceiver) {
    watch::channel(BatchProgress {
        total,
        ..Default::default()
    })
}
