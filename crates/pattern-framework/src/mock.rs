//! # Mock Framework
//!
//! Utilities for testing publishers in isolation.
//!
//! [`MockSubscriber`] stands in for a real subscriber. Queue the payloads you expect with
//! [`MockSubscriber::expect_update`], choose how each call should respond, run the code
//! under test, then call [`MockSubscriber::verify`].
//!
//! ```rust
//! use pattern_framework::mock::MockSubscriber;
//! use pattern_framework::EventHub;
//! use std::sync::Arc;
//!
//! let hub: EventHub<&'static str> = EventHub::new();
//! let mock = Arc::new(MockSubscriber::new("audit"));
//! mock.expect_update("report.pdf".to_string()).return_ok();
//! mock.expect_update("draft.txt".to_string()).return_err("disk full");
//!
//! hub.subscribe("save", mock.clone());
//! hub.publish(&"save", &"report.pdf".to_string());
//! let report = hub.publish(&"save", &"draft.txt".to_string());
//!
//! assert_eq!(report.faults.len(), 1);
//! mock.verify();
//! ```
//!
//! ## Why not panic on a mismatch?
//!
//! The hub catches panics raised inside `update`, so a panic there would only show up as
//! a fault in the publish report. Mismatches are recorded instead and surfaced by `verify`.

use crate::error::SubscriberError;
use crate::subscriber::Subscriber;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Mutex, MutexGuard, PoisonError};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected `update` call and the response to return for it.
struct Expectation<P> {
    payload: P,
    response: Result<(), SubscriberError>,
}

/// A mock subscriber with expectation tracking for fluent testing.
pub struct MockSubscriber<P> {
    name: String,
    expectations: Mutex<VecDeque<Expectation<P>>>,
    received: Mutex<Vec<P>>,
    mismatches: Mutex<Vec<String>>,
}

impl<P> MockSubscriber<P>
where
    P: Clone + PartialEq + Debug + Send,
{
    /// Creates a new mock subscriber with no expectations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expectations: Mutex::new(VecDeque::new()),
            received: Mutex::new(Vec::new()),
            mismatches: Mutex::new(Vec::new()),
        }
    }

    /// Expects an `update` with `payload`.
    pub fn expect_update(&self, payload: P) -> UpdateExpectationBuilder<'_, P> {
        UpdateExpectationBuilder {
            payload,
            mock: self,
        }
    }

    /// Every payload received so far, in order.
    pub fn received(&self) -> Vec<P> {
        lock(&self.received).clone()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let mismatches = lock(&self.mismatches);
        if !mismatches.is_empty() {
            panic!("Unexpected updates on {}: {}", self.name, mismatches.join("; "));
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<P> Subscriber<P> for MockSubscriber<P>
where
    P: Clone + PartialEq + Debug + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, payload: &P) -> Result<(), SubscriberError> {
        lock(&self.received).push(payload.clone());
        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(expected) if expected.payload == *payload => expected.response,
            Some(expected) => {
                let mismatch = format!("expected {:?}, got {:?}", expected.payload, payload);
                lock(&self.mismatches).push(mismatch.clone());
                Err(SubscriberError(mismatch))
            }
            None => {
                let mismatch = format!("no expectation left for {:?}", payload);
                lock(&self.mismatches).push(mismatch.clone());
                Err(SubscriberError(mismatch))
            }
        }
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<'a, P> {
    payload: P,
    mock: &'a MockSubscriber<P>,
}

impl<P> UpdateExpectationBuilder<'_, P> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        lock(&self.mock.expectations).push_back(Expectation {
            payload: self.payload,
            response: Ok(()),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, reason: impl Into<String>) {
        lock(&self.mock.expectations).push_back(Expectation {
            payload: self.payload,
            response: Err(SubscriberError::new(reason)),
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_subscriber_with_expectations() {
        let mock = MockSubscriber::new("audit");
        mock.expect_update(1u32).return_ok();
        mock.expect_update(2u32).return_err("rejected");

        assert_eq!(mock.update(&1), Ok(()));
        assert_eq!(mock.update(&2), Err(SubscriberError::new("rejected")));
        assert_eq!(mock.received(), vec![1, 2]);

        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_unmet_expectations() {
        let mock = MockSubscriber::new("audit");
        mock.expect_update(1u32).return_ok();
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected updates on audit")]
    fn test_verify_reports_unexpected_payloads() {
        let mock = MockSubscriber::new("audit");
        mock.expect_update(1u32).return_ok();
        let _ = mock.update(&5);
        mock.verify();
    }
}
