//! # Framework Errors
//!
//! This module defines the common error types used throughout the pattern framework.
//! Each building block (composite, hub, singleton) gets its own small enum so callers
//! can match on exactly the failures that block can produce.

use crate::geometry::GraphicId;

/// Errors raised by id-based composite operations.
///
/// Plain membership changes (`add`, `remove`) never fail; removing a non-member is a
/// no-op. Only operations that must be all-or-nothing report a problem.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CompositeError {
    #[error("Not a direct child: {0}")]
    NotAChild(GraphicId),
    #[error("Selected more than once: {0}")]
    DuplicateSelection(GraphicId),
}

/// Error returned by a [`Subscriber`](crate::subscriber::Subscriber) that could not
/// handle a notification.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SubscriberError(pub String);

impl SubscriberError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl From<String> for SubscriberError {
    fn from(msg: String) -> Self {
        SubscriberError(msg)
    }
}

/// A subscriber that faulted during `publish`, either by returning an error or by panicking.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Subscriber {subscriber} faulted: {reason}")]
pub struct SubscriberFault {
    pub subscriber: String,
    pub reason: String,
    pub panicked: bool,
}

/// Errors raised by [`Singleton`](crate::singleton::Singleton).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SingletonError {
    #[error("Singleton already initialized: {0}")]
    AlreadyInitialized(&'static str),
}
