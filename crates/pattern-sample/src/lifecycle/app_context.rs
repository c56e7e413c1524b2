use super::AppConfig;
use crate::database::{Database, InMemoryBackend};
use crate::file_editor::Editor;
use crate::listeners::{EmailAlertsListener, LoggingListener};
use crate::model::EditorEvent;
use pattern_framework::SingletonError;
use std::sync::Arc;
use tracing::info;

/// The application's explicit dependency handle.
///
/// Built once at startup by [`AppContext::bootstrap`] and passed by reference to whatever
/// needs the shared database or the configuration, so the dependency is visible in
/// signatures instead of hidden behind a global lookup.
///
/// # Example
///
/// ```ignore
/// let context = AppContext::bootstrap(AppConfig::from_env()?)?;
/// let mut editor = context.file_editor();
/// editor.open_file("/path/to/myfile.txt")?;
/// context.database.query("SELECT * FROM table1")?;
/// ```
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub database: &'static Database,
}

impl AppContext {
    /// Connects the shared database from `config`.
    ///
    /// Fails if the database was already connected, either by an earlier bootstrap or by
    /// a lazy [`Database::instance`] call.
    pub fn bootstrap(config: AppConfig) -> Result<Self, SingletonError> {
        let backend = Arc::new(InMemoryBackend::new());
        let database = Database::init(config.database_url.clone(), backend)?;
        info!(connection = database.connection(), "Application context ready");
        Ok(Self { config, database })
    }

    /// A file editor with the configured logging and e-mail listeners attached.
    pub fn file_editor(&self) -> Editor {
        let editor = Editor::new();
        let logger = LoggingListener::new(&self.config.log_file, &self.config.open_message);
        let alerts = EmailAlertsListener::new(&self.config.alert_email, &self.config.save_message);
        editor.events().subscribe(EditorEvent::Open, Arc::new(logger));
        editor.events().subscribe(EditorEvent::Save, Arc::new(alerts));
        editor
    }
}
