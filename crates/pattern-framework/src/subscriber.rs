//! # Subscriber Trait
//!
//! The capability an [`EventHub`](crate::hub::EventHub) invokes when an event type the
//! subscriber registered for is published.

use crate::error::SubscriberError;

/// A listener that receives payloads of type `P`.
///
/// Subscribers are shared as `Arc<dyn Subscriber<P>>`, so `update` takes `&self`.
/// Implementations that keep state use interior mutability.
///
/// The hub does not consult the `Ok` value; an `Err` (or a panic) is reported as a
/// [`SubscriberFault`](crate::error::SubscriberFault) and the remaining subscribers are
/// still notified.
pub trait Subscriber<P>: Send + Sync {
    /// Short name used in logs and fault reports.
    fn name(&self) -> &str;

    fn update(&self, payload: &P) -> Result<(), SubscriberError>;
}
