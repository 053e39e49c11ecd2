//! Contact-form validation schema
//!
//! Turns raw, untyped form fields into a typed [`ContactSubmission`] or an
//! ordered mapping of field name to machine-readable error codes. All
//! violations are collected in one pass; there is no partial success.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Error code: a required field was empty.
pub const ERR_REQUIRED: &str = "required";
/// Error code: the email field does not parse as an address.
pub const ERR_INVALID_EMAIL: &str = "invalid_email";
/// Error code: a field fell short of its minimum length.
pub const ERR_TOO_SHORT: &str = "too_short";
/// Error code: a field exceeded its maximum length.
pub const ERR_TOO_LONG: &str = "too_long";

pub const NAME_MAX: usize = 200;
pub const EMAIL_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;
pub const COMPANY_MAX: usize = 200;
pub const SERVICE_INTEREST_MAX: usize = 100;

// Deliberately loose: one non-space local part, one @, a dotted domain.
// Anything stricter rejects real addresses; the mailbox is the real oracle.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Field-keyed validation errors, ordered by field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<&'static str>>;

/// Raw form post as received from the client. Missing fields deserialize as
/// empty so the schema, not the extractor, reports them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, rename = "serviceInterest")]
    pub service_interest: String,
    /// Honeypot. Hidden from humans; bots fill it in.
    #[serde(default)]
    pub website_url: String,
}

/// A submission that has passed every schema rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: Option<String>,
    pub service_interest: Option<String>,
}

/// Validate a raw submission against the schema.
///
/// Returns the typed submission, or every rule violation keyed by field.
/// Optional fields submitted as empty strings are treated as absent.
/// Validation is pure: the same input always yields the same outcome.
pub fn validate(raw: &RawSubmission) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name_len = raw.name.chars().count();
    if name_len == 0 {
        errors.insert("name", vec![ERR_REQUIRED]);
    } else if name_len > NAME_MAX {
        errors.insert("name", vec![ERR_TOO_LONG]);
    }

    let email_len = raw.email.chars().count();
    if email_len == 0 {
        errors.insert("email", vec![ERR_REQUIRED]);
    } else {
        let mut codes = Vec::new();
        if !EMAIL_RE.is_match(&raw.email) {
            codes.push(ERR_INVALID_EMAIL);
        }
        if email_len > EMAIL_MAX {
            codes.push(ERR_TOO_LONG);
        }
        if !codes.is_empty() {
            errors.insert("email", codes);
        }
    }

    let message_len = raw.message.chars().count();
    if message_len < MESSAGE_MIN {
        errors.insert("message", vec![ERR_TOO_SHORT]);
    } else if message_len > MESSAGE_MAX {
        errors.insert("message", vec![ERR_TOO_LONG]);
    }

    let company = optional(&raw.company);
    if let Some(company) = &company {
        if company.chars().count() > COMPANY_MAX {
            errors.insert("company", vec![ERR_TOO_LONG]);
        }
    }

    let service_interest = optional(&raw.service_interest);
    if let Some(service) = &service_interest {
        // Set membership is intentionally not checked here; the UI constrains
        // the options and the schema only bounds the length.
        if service.chars().count() > SERVICE_INTEREST_MAX {
            errors.insert("serviceInterest", vec![ERR_TOO_LONG]);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: raw.name.clone(),
        email: raw.email.clone(),
        message: raw.message.clone(),
        company,
        service_interest,
    })
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
