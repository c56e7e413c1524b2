//! # Application Lifecycle
//!
//! Startup wiring for the demo application.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`AppConfig`] defaults plus environment overrides
//! 2. **Shared Resources** - connecting the one [`Database`](crate::database::Database)
//! 3. **Wiring** - attaching listeners to a fresh [`Editor`](crate::file_editor::Editor)
//!
//! Logging is initialized separately, by the binary, through
//! [`pattern_framework::logging::setup_tracing`].

pub mod app_context;
pub mod config;

pub use app_context::*;
pub use config::*;
