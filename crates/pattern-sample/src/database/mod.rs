//! # Database
//!
//! The shared resource of the Singleton pattern: one [`Database`] per process.
//!
//! ## Structure
//!
//! - [`backend`] - [`Backend`] trait and the [`InMemoryBackend`] stand-in
//! - [`error`] - [`ResourceError`] returned by [`Database::query`]
//!
//! ## Access
//!
//! There is no public constructor. The instance is reached in one of two ways:
//!
//! - [`Database::init`] at startup, with an explicit connection and backend; the returned
//!   `&'static Database` is then handed to consumers (see
//!   [`AppContext`](crate::lifecycle::AppContext)).
//! - [`Database::instance`] anywhere, which builds a default in-memory instance on
//!   first use if startup did not.
//!
//! ```rust
//! use pattern_sample::database::Database;
//!
//! let foo = Database::instance();
//! let bar = Database::instance();
//! assert!(std::ptr::eq(foo, bar));
//!
//! foo.query("SELECT * FROM table1").unwrap();
//! bar.query("UPDATE table2 SET column = 'value' WHERE id = 1").unwrap();
//! assert_eq!(foo.query_count(), 2);
//! ```

pub mod backend;
pub mod error;

pub use backend::*;
pub use error::*;

use pattern_framework::{Singleton, SingletonError};
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Connection used when the instance is built lazily.
pub const DEFAULT_CONNECTION: &str = "memory://default";

static DATABASE: Singleton<Database> = Singleton::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Result of a successful [`Database::query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// 1-based position of this query among all queries run on the instance.
    pub sequence: u64,
    pub statement: String,
    pub rows_affected: u64,
}

/// A connection to the application's data store.
///
/// Every query in the application goes through this single instance, which makes it the
/// place for cross-cutting concerns such as counting (done here) or caching.
pub struct Database {
    connection: String,
    backend: Arc<dyn Backend>,
    queries: AtomicU64,
}

impl Database {
    fn connect(connection: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        let connection = connection.into();
        let constructions = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        info!(%connection, backend = backend.name(), constructions, "Connecting");
        Self {
            connection,
            backend,
            queries: AtomicU64::new(0),
        }
    }

    /// The process-wide instance, connected to [`DEFAULT_CONNECTION`] on first use.
    pub fn instance() -> &'static Database {
        DATABASE.get_or_init(|| {
            Database::connect(DEFAULT_CONNECTION, Arc::new(InMemoryBackend::new()))
        })
    }

    /// Connects the process-wide instance explicitly. Call once, at startup.
    ///
    /// Fails with [`SingletonError::AlreadyInitialized`] (and connects nothing) if an
    /// instance already exists.
    pub fn init(
        connection: impl Into<String>,
        backend: Arc<dyn Backend>,
    ) -> Result<&'static Database, SingletonError> {
        DATABASE.init_with(|| Database::connect(connection, backend))
    }

    /// The instance, if one has been built.
    pub fn get() -> Option<&'static Database> {
        DATABASE.get()
    }

    /// How many times a `Database` was constructed in this process.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    /// Number of successful queries so far.
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::SeqCst)
    }

    /// Runs `statement` against the backend.
    ///
    /// # Errors
    /// - [`ResourceError::InvalidStatement`] if the statement is blank
    /// - [`ResourceError::Unavailable`] if the backend cannot be reached
    pub fn query(&self, statement: &str) -> Result<QueryOutcome, ResourceError> {
        let statement = statement.trim();
        if statement.is_empty() {
            warn!(connection = %self.connection, "Blank statement");
            return Err(ResourceError::InvalidStatement(statement.to_string()));
        }
        let rows_affected = self.backend.execute(statement).inspect_err(|e| {
            warn!(connection = %self.connection, error = %e, "Query failed");
        })?;
        let sequence = self.queries.fetch_add(1, Ordering::SeqCst) + 1;
        info!(connection = %self.connection, sequence, rows_affected, statement, "Query ok");
        Ok(QueryOutcome {
            sequence,
            statement: statement.to_string(),
            rows_affected,
        })
    }
}

impl Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("connection", &self.connection)
            .field("backend", &self.backend.name())
            .field("queries", &self.query_count())
            .finish()
    }
}
