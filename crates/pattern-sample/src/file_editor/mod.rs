//! # File Editor
//!
//! The publisher side of the Observer pattern. [`Editor`] owns an
//! [`EventHub`](pattern_framework::EventHub) keyed by [`EditorEvent`] and publishes the
//! current file's path whenever a file is opened or saved. Listeners subscribe through
//! [`Editor::events`] and never talk to the editor directly.
//!
//! ```rust
//! use pattern_sample::file_editor::Editor;
//! use pattern_sample::listeners::LoggingListener;
//! use pattern_sample::model::EditorEvent;
//! use std::sync::Arc;
//!
//! let mut editor = Editor::new();
//! let logger = Arc::new(LoggingListener::new("/var/log/editor.log", "Someone opened %s"));
//! editor.events().subscribe(EditorEvent::Open, logger.clone());
//!
//! editor.open_file("/tmp/notes.txt").unwrap();
//! assert_eq!(logger.lines(), vec!["Someone opened /tmp/notes.txt"]);
//! ```

pub mod error;

pub use error::*;

use crate::model::EditorEvent;
use pattern_framework::{EventHub, PublishReport};
use tracing::{info, instrument};

/// A text editor that announces file activity to its subscribers.
#[derive(Default)]
pub struct Editor {
    events: EventHub<EditorEvent, String>,
    file: Option<String>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The subscription registry listeners register with.
    pub fn events(&self) -> &EventHub<EditorEvent, String> {
        &self.events
    }

    pub fn current_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Makes `path` the current file and publishes [`EditorEvent::Open`].
    #[instrument(skip(self, path), fields(path = %path.as_ref()))]
    pub fn open_file(&mut self, path: impl AsRef<str>) -> Result<PublishReport, EditorError> {
        let path = path.as_ref().trim();
        if path.is_empty() {
            return Err(EditorError::InvalidPath(path.to_string()));
        }
        self.file = Some(path.to_string());
        info!("File opened");
        Ok(self.events.publish(&EditorEvent::Open, &path.to_string()))
    }

    /// Saves the current file and publishes [`EditorEvent::Save`] with its path.
    #[instrument(skip(self))]
    pub fn save_file(&self) -> Result<PublishReport, EditorError> {
        let file = self.file.as_ref().ok_or(EditorError::NoOpenFile)?;
        info!(path = %file, "File saved");
        Ok(self.events.publish(&EditorEvent::Save, file))
    }
}
