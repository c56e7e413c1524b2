//! # Pattern Recipe App Library
//!
//! The concrete domain built on `pattern_framework`, exposed for the demo binary and for
//! integration testing.
//!
//! - **[model]**: [`Shape`](model::Shape) (dots, circles, groups) and [`EditorEvent`](model::EditorEvent)
//! - **[canvas]**: rendering sinks for the scene
//! - **[image_editor]**: the Composite client
//! - **[file_editor]** and **[listeners]**: the Observer publisher and its subscribers
//! - **[database]**: the Singleton resource
//! - **[lifecycle]**: configuration and startup wiring

pub mod canvas;
pub mod database;
pub mod file_editor;
pub mod image_editor;
pub mod lifecycle;
pub mod listeners;
pub mod model;
