//! Resend API client
//!
//! One bearer-authenticated JSON POST per message. No retry: a submission is
//! a single attempt, and the caller maps failure to a generic server error.

use crate::email::{EmailDispatch, OutgoingEmail};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

// Bounds the handler's only suspension point; Resend normally answers in
// well under a second.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// HTTP client for the Resend transactional email API.
///
/// Holds the API credential explicitly; construct once at startup and share
/// behind an `Arc` rather than reaching for a global.
pub struct ResendClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ResendClient {
    /// Create a client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: RESEND_ENDPOINT.to_string(),
        })
    }

    /// Override the API endpoint, for tests against a local server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl EmailDispatch for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let request = SendRequest {
            from: &email.from,
            to: [&email.to],
            reply_to: &email.reply_to,
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Dispatch(format!("Resend request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Dispatch(format!(
            "Resend rejected the message ({status}): {body}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_resend_wire_format() {
        let request = SendRequest {
            from: "Site <no-reply@example.com>",
            to: ["inbox@example.com"],
            reply_to: "ana@example.com",
            subject: "New contact from Ana",
            html: "<p>hi</p>",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["from"], "Site <no-reply@example.com>");
        assert_eq!(json["to"][0], "inbox@example.com");
        assert_eq!(json["reply_to"], "ana@example.com");
        assert_eq!(json["subject"], "New contact from Ana");
        assert_eq!(json["html"], "<p>hi</p>");
    }

    #[test]
    fn client_construction_succeeds() {
        let client = ResendClient::new("re_test").unwrap();
        assert_eq!(client.endpoint, RESEND_ENDPOINT);

        let client = client.with_endpoint("http://127.0.0.1:9999/emails");
        assert_eq!(client.endpoint, "http://127.0.0.1:9999/emails");
    }
}
