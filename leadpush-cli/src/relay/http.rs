//! HTTP implementation of the relay boundary

use async_trait::async_trait;

use super::{RelayClient, RelayConfig, RelayError};
use crate::payload::SubmissionPayload;

/// Submits records to the relay endpoint as JSON POSTs.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    client: reqwest::Client,
    config: RelayConfig,
}

impl HttpRelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            // Any 2xx is a success; the body is not inspected.
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Status {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

/// Pull a readable message out of an error response body.
///
/// The relay reports failures as `{"success": false, "error": ...}`;
/// fall back to the raw body, then to a generic message.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = value.get("error") {
            return match error {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "relay returned an error response".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_json_error_field() {
        let body = r#"{"success": false, "error": "upstream rejected the record"}"#;
        assert_eq!(extract_error_message(body), "upstream rejected the record");
    }

    #[test]
    fn test_extract_error_message_structured_error_field() {
        let body = r#"{"success": false, "error": {"code": 42}}"#;
        assert_eq!(extract_error_message(body), r#"{"code":42}"#);
    }

    #[test]
    fn test_extract_error_message_plain_body() {
        assert_eq!(extract_error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_extract_error_message_empty_body() {
        assert_eq!(
            extract_error_message(""),
            "relay returned an error response"
        );
    }

    #[test]
    fn test_extract_error_message_json_without_error_field() {
        let body = r#"{"success": false}"#;
        assert_eq!(extract_error_message(body), r#"{"success": false}"#);
    }
}
