//! Test utilities
//!
//! Shipped in the crate so integration tests can share the mock dispatcher.

use crate::email::{EmailDispatch, OutgoingEmail};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Counting in-memory [`EmailDispatch`] for tests.
///
/// Records every message it is asked to send and can be configured to fail,
/// simulating a provider outage.
pub struct MockDispatch {
    calls: AtomicUsize,
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl MockDispatch {
    /// A dispatcher that accepts everything.
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A dispatcher that fails every send.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }

    /// Number of send attempts, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages that were accepted.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mock lock poisoned").clone()
    }
}

impl Default for MockDispatch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailDispatch for MockDispatch {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Dispatch("simulated provider outage".to_string()));
        }
        self.sent.lock().expect("mock lock poisoned").push(email.clone());
        Ok(())
    }
}
