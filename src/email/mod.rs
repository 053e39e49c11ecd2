//! Outgoing email construction and dispatch
//!
//! [`OutgoingEmail`] is built only from a schema-validated submission, so no
//! unvalidated field ever reaches the message body. Dispatch goes through the
//! [`EmailDispatch`] trait so the handler can be tested without a provider.

use crate::config::MailConfig;
use crate::error::Result;
use crate::schema::ContactSubmission;
use async_trait::async_trait;

pub mod resend;

pub use resend::ResendClient;

/// A fully assembled message ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    /// Submitter's address, so the recipient can reply directly.
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// Build the outbound message for a validated submission.
    pub fn from_submission(submission: &ContactSubmission, config: &MailConfig) -> Self {
        Self {
            from: config.from_email.clone(),
            to: config.to_email.clone(),
            reply_to: submission.email.clone(),
            subject: format!("New contact from {}", submission.name),
            html: render_html(submission),
        }
    }
}

/// Trait for sending a single transactional email.
///
/// One attempt per call, success or failure reported synchronously. No retry
/// policy lives behind this seam.
#[async_trait]
pub trait EmailDispatch: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}

/// Escape a user-supplied value for interpolation into HTML.
///
/// Every submission field passes through here before rendering; the message
/// body must never carry executable markup from the form.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn detail_row(label: &str, value: &str, shaded: bool) -> String {
    let row_style = if shaded { " style=\"background:#f9fafb;\"" } else { "" };
    format!(
        "<tr{row_style}><td style=\"padding:8px 12px;font-weight:600;color:#374151;vertical-align:top;\">{label}</td>\
         <td style=\"padding:8px 12px;color:#111827;\">{}</td></tr>",
        escape_html(value)
    )
}

fn render_html(submission: &ContactSubmission) -> String {
    let mut rows = String::new();
    rows.push_str(&detail_row("Name", &submission.name, false));
    rows.push_str(&detail_row("Email", &submission.email, true));
    if let Some(company) = &submission.company {
        rows.push_str(&detail_row("Company", company, false));
    }
    if let Some(service) = &submission.service_interest {
        rows.push_str(&detail_row("Service Interest", service, false));
    }

    format!(
        "<!DOCTYPE html>\
<html>\
<head><meta charset=\"utf-8\"></head>\
<body style=\"margin:0;padding:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background-color:#f9fafb;\">\
<div style=\"max-width:600px;margin:0 auto;padding:24px;\">\
<h1 style=\"font-size:20px;color:#111827;margin:0 0 16px;\">New Contact Form Submission</h1>\
<table style=\"width:100%;border-collapse:collapse;background:#ffffff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,0.1);\">{rows}</table>\
<hr style=\"border:none;border-top:1px solid #e5e7eb;margin:24px 0;\" />\
<div style=\"background:#ffffff;padding:16px;border-radius:8px;box-shadow:0 1px 3px rgba(0,0,0,0.1);\">\
<h2 style=\"font-size:14px;color:#6b7280;margin:0 0 8px;text-transform:uppercase;letter-spacing:0.05em;\">Message</h2>\
<p style=\"font-size:15px;color:#111827;line-height:1.6;margin:0;white-space:pre-wrap;\">{message}</p>\
</div>\
</div>\
</body>\
</html>",
        message = escape_html(&submission.message)
    )
}
