//! Pure data structures: the shapes of the composite scene and the editor's event types.

pub mod event;
pub mod shape;

pub use event::*;
pub use shape::*;
