use super::ResourceError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Whatever the [`Database`](super::Database) ultimately talks to.
pub trait Backend: Send + Sync {
    fn name(&self) -> &str;

    /// Runs `statement`, returning the number of affected rows.
    fn execute(&self, statement: &str) -> Result<u64, ResourceError>;
}

/// A stand-in store that only remembers the statements it was given.
///
/// Availability can be toggled to simulate an unreachable server.
#[derive(Debug)]
pub struct InMemoryBackend {
    available: AtomicBool,
    executed: Mutex<Vec<String>>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            executed: Mutex::new(Vec::new()),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Backend for InMemoryBackend {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn execute(&self, statement: &str) -> Result<u64, ResourceError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(ResourceError::Unavailable(self.name().to_string()));
        }
        let mut executed = self.executed.lock().unwrap_or_else(PoisonError::into_inner);
        executed.push(statement.to_string());
        debug!(backend = self.name(), total = executed.len(), "Executed");
        // Mutations report one affected row, reads none.
        let rows = u64::from(!statement.trim_start().to_ascii_uppercase().starts_with("SELECT"));
        Ok(rows)
    }
}
