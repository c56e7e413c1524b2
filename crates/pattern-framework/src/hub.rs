//! # Event Hub
//!
//! This module defines [`EventHub`], a process-local publish/subscribe registry.
//!
//! ## Delivery
//!
//! - Subscribers are kept per event type, in registration order.
//! - [`EventHub::publish`] notifies them synchronously, on the caller's thread, in that order.
//! - Publishing an event type nobody subscribed to is a no-op.
//! - A faulting subscriber (error or panic) is logged and reported, and the rest of the
//!   list is still notified.
//!
//! ## Locking
//!
//! The registry sits behind an `RwLock`: `subscribe`/`unsubscribe` take the write lock,
//! `publish` takes the read lock only long enough to snapshot the subscriber list. No
//! lock is held while subscribers run, so a subscriber may (un)subscribe from inside
//! `update`. Changes made during a publish apply to the next publish.

use crate::error::SubscriberFault;
use crate::subscriber::Subscriber;
use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Shared handle to a subscriber.
pub type SubscriberHandle<P> = Arc<dyn Subscriber<P>>;

/// Outcome of a single [`EventHub::publish`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Subscribers that handled the payload without fault.
    pub delivered: usize,
    /// Subscribers that returned an error or panicked.
    pub faults: Vec<SubscriberFault>,
}

impl PublishReport {
    /// Total number of subscribers that were invoked.
    pub fn notified(&self) -> usize {
        self.delivered + self.faults.len()
    }

    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Maps event types `K` to ordered lists of subscribers receiving payloads `P`.
///
/// `K` is usually a closed enum of event kinds, which turns a misspelled event type into
/// a compile error. Any `Eq + Hash` key works, including `String`.
pub struct EventHub<K, P = String> {
    registry: RwLock<HashMap<K, Vec<SubscriberHandle<P>>>>,
}

impl<K, P> Default for EventHub<K, P>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> EventHub<K, P>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Appends `subscriber` to the list for `event_type`.
    ///
    /// Not idempotent: subscribing the same handle twice yields two notifications per publish.
    pub fn subscribe(&self, event_type: K, subscriber: SubscriberHandle<P>) {
        let mut registry = self.write();
        let list = registry.entry(event_type.clone()).or_default();
        list.push(subscriber.clone());
        info!(?event_type, subscriber = subscriber.name(), size = list.len(), "Subscribed");
    }

    /// Removes every registration of `subscriber` (same handle) for `event_type`.
    ///
    /// Returns how many registrations were removed. Unknown event types and
    /// non-subscribers are a no-op.
    pub fn unsubscribe(&self, event_type: &K, subscriber: &SubscriberHandle<P>) -> usize {
        let mut registry = self.write();
        let Some(list) = registry.get_mut(event_type) else {
            debug!(?event_type, "Unsubscribe skipped, unknown event type");
            return 0;
        };
        let before = list.len();
        list.retain(|registered| !Arc::ptr_eq(registered, subscriber));
        let removed = before - list.len();
        if list.is_empty() {
            registry.remove(event_type);
        }
        info!(?event_type, subscriber = subscriber.name(), removed, "Unsubscribed");
        removed
    }

    /// Invokes every subscriber registered for `event_type` with `payload`, in order.
    pub fn publish(&self, event_type: &K, payload: &P) -> PublishReport
    where
        P: Debug,
    {
        let subscribers = match self.read().get(event_type) {
            Some(list) => list.clone(),
            None => {
                debug!(?event_type, "No subscribers");
                return PublishReport::default();
            }
        };
        debug!(?event_type, ?payload, size = subscribers.len(), "Publish");

        let mut report = PublishReport::default();
        for subscriber in subscribers {
            let name = subscriber.name();
            let fault = match panic::catch_unwind(AssertUnwindSafe(|| subscriber.update(payload))) {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(e)) => SubscriberFault {
                    subscriber: name.to_string(),
                    reason: e.to_string(),
                    panicked: false,
                },
                Err(panic) => SubscriberFault {
                    subscriber: name.to_string(),
                    reason: panic_message(panic.as_ref()),
                    panicked: true,
                },
            };
            warn!(
                ?event_type,
                subscriber = name,
                error = %fault.reason,
                panicked = fault.panicked,
                "Subscriber faulted"
            );
            report.faults.push(fault);
        }
        report
    }

    /// Number of registrations (duplicates included) for `event_type`.
    pub fn subscriber_count(&self, event_type: &K) -> usize {
        self.read().get(event_type).map_or(0, Vec::len)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, Vec<SubscriberHandle<P>>>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, Vec<SubscriberHandle<P>>>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubscriberError;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Kind {
        Open,
        Save,
    }

    struct Recorder {
        name: String,
        seen: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Subscriber<String> for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&self, payload: &String) -> Result<(), SubscriberError> {
            self.seen.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    struct Failing;

    impl Subscriber<String> for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn update(&self, _payload: &String) -> Result<(), SubscriberError> {
            Err(SubscriberError::new("mailbox full"))
        }
    }

    struct Panicking;

    impl Subscriber<String> for Panicking {
        fn name(&self) -> &str {
            "panicking"
        }

        fn update(&self, _payload: &String) -> Result<(), SubscriberError> {
            panic!("boom");
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let hub: EventHub<Kind> = EventHub::new();
        let report = hub.publish(&Kind::Open, &"f.txt".to_string());
        assert_eq!(report, PublishReport::default());
        assert_eq!(report.notified(), 0);
    }

    #[test]
    fn test_fan_out_is_per_event_type() {
        let hub: EventHub<Kind> = EventHub::new();
        let logger = Recorder::new("logger");
        let alerter = Recorder::new("alerter");
        hub.subscribe(Kind::Open, logger.clone());
        hub.subscribe(Kind::Save, alerter.clone());

        hub.publish(&Kind::Open, &"f.txt".to_string());
        assert_eq!(logger.seen(), vec!["f.txt"]);
        assert!(alerter.seen().is_empty());

        hub.publish(&Kind::Save, &"f.txt".to_string());
        assert_eq!(logger.seen(), vec!["f.txt"]);
        assert_eq!(alerter.seen(), vec!["f.txt"]);
    }

    #[test]
    fn test_double_subscribe_notifies_twice_and_unsubscribe_removes_all() {
        let hub: EventHub<Kind> = EventHub::new();
        let logger = Recorder::new("logger");
        let handle: SubscriberHandle<String> = logger.clone();
        hub.subscribe(Kind::Open, handle.clone());
        hub.subscribe(Kind::Open, handle.clone());

        let report = hub.publish(&Kind::Open, &"a".to_string());
        assert_eq!(report.delivered, 2);
        assert_eq!(logger.seen(), vec!["a", "a"]);

        assert_eq!(hub.unsubscribe(&Kind::Open, &handle), 2);
        assert_eq!(hub.subscriber_count(&Kind::Open), 0);
        hub.publish(&Kind::Open, &"b".to_string());
        assert_eq!(logger.seen(), vec!["a", "a"]);

        assert_eq!(hub.unsubscribe(&Kind::Save, &handle), 0);
    }

    #[test]
    fn test_faults_do_not_silence_later_subscribers() {
        let hub: EventHub<Kind> = EventHub::new();
        let first = Recorder::new("first");
        let last = Recorder::new("last");
        hub.subscribe(Kind::Save, first.clone());
        hub.subscribe(Kind::Save, Arc::new(Failing));
        hub.subscribe(Kind::Save, Arc::new(Panicking));
        hub.subscribe(Kind::Save, last.clone());

        let report = hub.publish(&Kind::Save, &"doc".to_string());

        assert_eq!(report.delivered, 2);
        assert_eq!(report.notified(), 4);
        assert!(!report.is_clean());
        assert_eq!(report.faults[0].subscriber, "failing");
        assert_eq!(report.faults[0].reason, "mailbox full");
        assert!(!report.faults[0].panicked);
        assert_eq!(report.faults[1].subscriber, "panicking");
        assert_eq!(report.faults[1].reason, "boom");
        assert!(report.faults[1].panicked);
        assert_eq!(first.seen(), vec!["doc"]);
        assert_eq!(last.seen(), vec!["doc"]);
    }
}
