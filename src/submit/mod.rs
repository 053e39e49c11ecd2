//! Submission handling
//!
//! Orchestrates one contact-form post: honeypot check, schema validation,
//! email construction, and a single dispatch attempt. Each call is a pure
//! function of its input plus at most one outbound email; there is no state
//! shared across submissions.

use crate::config::MailConfig;
use crate::email::{EmailDispatch, OutgoingEmail};
use crate::schema::{self, FieldErrors, RawSubmission};
use tracing::{debug, error, info};

/// Outcome of one submission, in the order the pipeline decides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The email was sent, or the honeypot fired and the submission was
    /// silently discarded. Bots get the same answer as humans.
    Accepted,
    /// Validation failed; nothing was sent.
    Rejected { field_errors: FieldErrors },
    /// Validation passed but dispatch failed. The underlying error is logged,
    /// never surfaced to the caller.
    ServerError,
}

/// Handle one raw contact-form submission.
///
/// Order matters: the honeypot short-circuits before validation so bots never
/// see a validation error, and validation short-circuits before dispatch so a
/// rejected submission has no side effects.
pub async fn handle_submission(
    dispatch: &dyn EmailDispatch,
    config: &MailConfig,
    raw: &RawSubmission,
) -> SubmissionResult {
    if !raw.website_url.is_empty() {
        // Convincing fake success; a real error would invite retries.
        debug!("Honeypot triggered, discarding submission");
        return SubmissionResult::Accepted;
    }

    let submission = match schema::validate(raw) {
        Ok(submission) => submission,
        Err(field_errors) => {
            return SubmissionResult::Rejected { field_errors };
        }
    };

    let email = OutgoingEmail::from_submission(&submission, config);
    match dispatch.send(&email).await {
        Ok(()) => {
            info!("Contact submission relayed for {}", submission.email);
            SubmissionResult::Accepted
        }
        Err(e) => {
            error!("Contact email dispatch failed: {e}");
            SubmissionResult::ServerError
        }
    }
}
