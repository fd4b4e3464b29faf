//! Error taxonomy for the import pipeline
//!
//! These are the fatal, pre-submission errors: each one aborts the whole
//! attempt before any record reaches the relay. Per-record relay failures
//! are not fatal and live in `crate::relay::RelayError`.

use thiserror::Error;

/// Errors that abort an import before submission starts.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The selected file is not an Excel spreadsheet. Raised on the
    /// extension alone, before any decode attempt.
    #[error("not an Excel file (expected .xlsx or .xls): {path}")]
    InvalidSelection { path: String },

    /// The file could not be decoded as a spreadsheet.
    #[error("could not read spreadsheet: {reason}")]
    Parse { reason: String },

    /// No row carried a non-empty email address, so there is nothing
    /// to submit.
    #[error("no rows with a non-empty email address")]
    NoValidRows,
}
