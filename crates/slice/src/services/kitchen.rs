//! HTTP client for the kitchen's order endpoint.

use serde::Deserialize;
use tracing::debug;

use order::OrderPayload;

/// Reply body of the order endpoint. Success and failure replies both
/// carry at most a human-readable `message`.
#[derive(Debug, Deserialize)]
struct KitchenReply {
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KitchenError {
    /// The kitchen answered with a non-success status. The message is
    /// shown to the user verbatim.
    #[error("{message}")]
    Rejected { message: String },
    /// The request never produced a reply (connection refused, timeout, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct KitchenClient {
    http: reqwest::Client,
    endpoint: String,
}

impl KitchenClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one order. `Ok` carries the kitchen's optional message; a
    /// non-success status turns into [`KitchenError::Rejected`] with the
    /// body's message, falling back to the status line when the body has
    /// none.
    pub async fn submit(&self, payload: &OrderPayload) -> Result<Option<String>, KitchenError> {
        debug!(endpoint = %self.endpoint, "submitting order");
        let response = self.http.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return Ok(message_from_body(&body));
        }

        let message = message_from_body(&body)
            .unwrap_or_else(|| format!("order rejected with status {status}"));
        Err(KitchenError::Rejected { message })
    }
}

/// Pull the `message` field out of a reply body, if there is one.
fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<KitchenReply>(body)
        .ok()
        .and_then(|reply| reply.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_is_taken_from_the_body() {
        let body = r#"{"message":"Pineapple is sold out"}"#;
        assert_eq!(
            message_from_body(body),
            Some("Pineapple is sold out".to_string())
        );
    }

    #[test]
    fn extra_fields_do_not_break_parsing() {
        let body = r#"{"message":"thanks","order_id":17}"#;
        assert_eq!(message_from_body(body), Some("thanks".to_string()));
    }

    #[test]
    fn non_json_bodies_yield_no_message() {
        assert_eq!(message_from_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(message_from_body(""), None);
        assert_eq!(message_from_body(r#"{"error":"nope"}"#), None);
    }
}
