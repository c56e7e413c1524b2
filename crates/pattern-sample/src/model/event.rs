use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Event types published by the [`Editor`](crate::file_editor::Editor).
///
/// A closed enum instead of free-form strings: subscribing to a misspelled event type
/// does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorEvent {
    /// A file was opened. Payload: the file's path.
    Open,
    /// The current file was saved. Payload: the file's path.
    Save,
}

impl Display for EditorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorEvent::Open => write!(f, "open"),
            EditorEvent::Save => write!(f, "save"),
        }
    }
}
