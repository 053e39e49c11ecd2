//! Mail configuration sourced from the environment

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default sender identity used when `RESEND_FROM_EMAIL` is unset.
///
/// Resend accepts this onboarding address for accounts without a verified
/// domain, so a fresh deployment can send mail before DNS is configured.
pub const DEFAULT_FROM_EMAIL: &str = "M. Gripe Website <onboarding@resend.dev>";

/// Default recipient used when `RESEND_TO_EMAIL` is unset.
pub const DEFAULT_TO_EMAIL: &str = "contact@mgripe.com";

/// Addresses and credential for outbound contact email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Sender address, `Name <addr>` form accepted.
    pub from_email: String,
    /// Inbox that receives contact submissions.
    pub to_email: String,
    /// Resend API key. Never logged.
    pub api_key: String,
}

impl MailConfig {
    /// Load mail configuration from the environment.
    ///
    /// `RESEND_API_KEY` is required; sender and recipient fall back to the
    /// documented defaults. Missing credential is a startup error rather than
    /// a per-request failure.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("RESEND_API_KEY")
            .map_err(|_| Error::Config("RESEND_API_KEY is not set".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(Error::Config("RESEND_API_KEY is empty".to_string()));
        }

        Ok(Self {
            from_email: std::env::var("RESEND_FROM_EMAIL")
                .unwrap_or_else(|_| DEFAULT_FROM_EMAIL.to_string()),
            to_email: std::env::var("RESEND_TO_EMAIL")
                .unwrap_or_else(|_| DEFAULT_TO_EMAIL.to_string()),
            api_key,
        })
    }

    /// Construct a config with explicit addresses, mainly for tests.
    pub fn new(
        from_email: impl Into<String>,
        to_email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            from_email: from_email.into(),
            to_email: to_email.into(),
            api_key: api_key.into(),
        }
    }
}
