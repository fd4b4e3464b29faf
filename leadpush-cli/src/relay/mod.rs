//! Relay boundary
//!
//! The relay is an external service that forwards one shaped record to
//! the upstream partner API. The core only depends on this boundary:
//! POST one JSON payload, get back success or a per-record failure.

pub mod http;

pub use http::HttpRelayClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::payload::SubmissionPayload;

/// Where submissions go. Injected at client construction; never a
/// hard-coded literal in the pipeline.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub url: String,
}

impl RelayConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Failure of a single record's relay call. Never fatal to the batch.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never completed (connection, DNS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("relay returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// One outbound submission at a time; `submit` resolves only once the
/// relay has answered for this record.
#[async_trait]
pub trait RelayClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), RelayError>;
}
