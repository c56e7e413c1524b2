//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The output uses the compact
//! format without the crate/module prefix (`with_target(false)`); each event already
//! carries structured fields (`group`, `subscriber`, `event_type`, ...) that say where it
//! came from.
//!
//! ```bash
//! # Scenario-level logs
//! RUST_LOG=info cargo run
//!
//! # Every add/remove, publish payload and empty-group frame
//! RUST_LOG=debug cargo run
//!
//! # Only the event hub
//! RUST_LOG=pattern_framework::hub=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Composite**: membership changes (`debug`), grouping (`info`), rejected groupings (`warn`)
//! - **Event Hub**: (un)subscriptions (`info`), publishes (`debug`), subscriber faults (`warn`)
//! - **Singleton**: construction and explicit initialization (`info`)
//!
//! With `RUST_LOG=info` a publish with one faulting subscriber looks like:
//!
//! ```text
//! INFO observer_demo: Subscribed event_type=Open subscriber="logging" size=1
//! WARN observer_demo: Subscriber faulted event_type=Save subscriber="email-alerts" error=no recipient panicked=false
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields already identify the source
        .compact() // Compact format shows spans inline (e.g., "observer_demo: ...")
        .init();
}
