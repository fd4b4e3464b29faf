//! Batch submission
//!
//! One batch is a single ordered pass over the validated rows of one
//! spreadsheet: `driver` submits them through the relay one at a time,
//! `progress` exposes the run's state to observers.

pub mod driver;
pub mod progress;

pub use driver::{BatchDriver, BatchReport, FailurePolicy, RecordFailure};
pub use progress::{BatchProgress, ProgressReceiver, ProgressSender, progress_channel};
