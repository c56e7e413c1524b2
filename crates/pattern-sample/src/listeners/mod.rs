//! # Listeners
//!
//! Concrete [`Subscriber`](pattern_framework::Subscriber)s for the file editor's events.
//!
//! Both listeners format a message template, where `%s` stands for the file name they
//! were notified about, and hand the line to their (stubbed) output:
//!
//! - [`LoggingListener`] appends it to a log file.
//! - [`EmailAlertsListener`] e-mails it to a recipient.
//!
//! The real I/O is out of scope: each delivered line is emitted as a `tracing` event and
//! kept in memory, which is also what the tests inspect.

pub mod email_alerts;
pub mod logging;

pub use email_alerts::*;
pub use logging::*;

/// Replaces every `%s` in `template` with `value`.
pub fn fill_template(template: &str, value: &str) -> String {
    template.replace("%s", value)
}
