//! Contact form state-machine contract
//!
//! The form renderer owns no validation; it only moves between these phases
//! in response to a [`SubmissionResult`]. Kept here so the server and any
//! client renderer agree on one contract.

use crate::submit::SubmissionResult;

/// Service options the form offers. The schema deliberately does not enforce
/// membership; this list is the single source for renderers that do.
pub const SERVICE_INTEREST_OPTIONS: [&str; 5] =
    ["advisory", "delivery", "alignment", "fractional", "other"];

/// Observable phases of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing submitted yet; fields editable.
    Idle,
    /// A submission is in flight; inputs disabled.
    Pending,
    /// Confirmation shown; fields no longer rendered. Terminal.
    Success,
    /// Server-level or per-field errors shown; fields stay editable.
    Error,
}

impl FormPhase {
    /// The user pressed submit. Only editable phases can enter `Pending`;
    /// `Success` is terminal for the render.
    pub fn submit(self) -> FormPhase {
        match self {
            FormPhase::Idle | FormPhase::Error => FormPhase::Pending,
            FormPhase::Pending | FormPhase::Success => self,
        }
    }

    /// A result came back for the in-flight submission.
    pub fn resolve(self, result: &SubmissionResult) -> FormPhase {
        if self != FormPhase::Pending {
            return self;
        }
        match result {
            SubmissionResult::Accepted => FormPhase::Success,
            SubmissionResult::Rejected { .. } | SubmissionResult::ServerError => FormPhase::Error,
        }
    }
}
