//! # Guarded Singleton
//!
//! [`Singleton`] is a once-only cell meant to live in a `static`. The first caller builds
//! the value; every other caller, including those racing it from other threads, blocks
//! until construction finishes and then observes the very same instance.
//!
//! Built on [`std::sync::OnceLock`]: after the value exists, access is a plain atomic
//! load with no locking.
//!
//! ```rust
//! use pattern_framework::Singleton;
//!
//! struct Registry { name: &'static str }
//!
//! static REGISTRY: Singleton<Registry> = Singleton::new();
//!
//! let a = REGISTRY.get_or_init(|| Registry { name: "main" });
//! let b = REGISTRY.get_or_init(|| Registry { name: "never built" });
//! assert!(std::ptr::eq(a, b));
//! assert_eq!(b.name, "main");
//! ```

use crate::error::SingletonError;
use std::sync::OnceLock;
use tracing::{debug, info};

/// A process-wide value constructed exactly once.
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the instance, running `init` first if nobody has built it yet.
    ///
    /// `init` runs at most once over the lifetime of the cell, no matter how many
    /// threads call this concurrently.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            info!(instance = type_label::<T>(), "Constructing singleton");
            init()
        })
    }

    /// Installs `value` as the instance during explicit startup.
    ///
    /// Fails with [`SingletonError::AlreadyInitialized`] if an instance already exists;
    /// `value` is dropped in that case and the existing instance is kept.
    pub fn init(&self, value: T) -> Result<&T, SingletonError> {
        self.init_with(|| value)
    }

    /// Like [`Singleton::init`], but only builds the value if it will be installed.
    pub fn init_with(&self, build: impl FnOnce() -> T) -> Result<&T, SingletonError> {
        let mut installed = false;
        let instance = self.cell.get_or_init(|| {
            installed = true;
            build()
        });
        if installed {
            info!(instance = type_label::<T>(), "Singleton initialized");
            Ok(instance)
        } else {
            debug!(instance = type_label::<T>(), "Singleton init rejected");
            Err(SingletonError::AlreadyInitialized(type_label::<T>()))
        }
    }

    /// The instance, if it has been built.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

// Extract just the type name (e.g., "Database" instead of "pattern_sample::database::Database").
// Generic arguments are dropped: `Vec<foo::Bar>` is labelled "Vec".
fn type_label<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}
