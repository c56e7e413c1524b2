//! # Canvas
//!
//! Rendering sinks for the shape scene.
//!
//! [`Canvas`] extends the framework's [`Renderer`] with one method per leaf variant. The
//! scene decides *what* gets drawn and in which order; a canvas decides *how*:
//!
//! - [`ConsoleCanvas`] emits one `tracing` event per mark (used by the demo binary).
//! - [`RecordingCanvas`] keeps every [`Mark`] in order (used by tests to check traversal).

use pattern_framework::{Bounds, GraphicId, Position, Renderer};
use tracing::info;

/// A rendering sink that knows how to draw every leaf shape.
pub trait Canvas: Renderer {
    fn dot(&mut self, id: GraphicId, at: Position);

    fn circle(&mut self, id: GraphicId, center: Position, radius: u32);
}

/// One thing drawn on a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Dot {
        id: GraphicId,
        at: Position,
    },
    Circle {
        id: GraphicId,
        center: Position,
        radius: u32,
    },
    /// The dashed rectangle drawn around a group.
    Frame { group: GraphicId, bounds: Bounds },
}

impl Mark {
    /// The id of the shape (or group) this mark belongs to.
    pub fn owner(&self) -> GraphicId {
        match self {
            Mark::Dot { id, .. } | Mark::Circle { id, .. } => *id,
            Mark::Frame { group, .. } => *group,
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self, Mark::Frame { .. })
    }
}

/// Logs every mark instead of painting it.
#[derive(Debug, Default)]
pub struct ConsoleCanvas {
    drawn: usize,
}

impl ConsoleCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of marks drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl Renderer for ConsoleCanvas {
    fn frame(&mut self, group: GraphicId, bounds: Bounds) {
        self.drawn += 1;
        info!(
            %group,
            %bounds,
            width = bounds.width(),
            height = bounds.height(),
            "Draw dashed frame"
        );
    }
}

impl Canvas for ConsoleCanvas {
    fn dot(&mut self, id: GraphicId, at: Position) {
        self.drawn += 1;
        info!(%id, %at, "Draw dot");
    }

    fn circle(&mut self, id: GraphicId, center: Position, radius: u32) {
        self.drawn += 1;
        info!(%id, %center, radius, "Draw circle");
    }
}

/// Keeps every mark, in drawing order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    marks: Vec<Mark>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Owners of the leaf marks only, in drawing order.
    pub fn leaf_ids(&self) -> Vec<GraphicId> {
        self.marks
            .iter()
            .filter(|mark| !mark.is_frame())
            .map(Mark::owner)
            .collect()
    }

    pub fn frames(&self) -> Vec<(GraphicId, Bounds)> {
        self.marks
            .iter()
            .filter_map(|mark| match mark {
                Mark::Frame { group, bounds } => Some((*group, *bounds)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingCanvas {
    fn frame(&mut self, group: GraphicId, bounds: Bounds) {
        self.marks.push(Mark::Frame { group, bounds });
    }
}

impl Canvas for RecordingCanvas {
    fn dot(&mut self, id: GraphicId, at: Position) {
        self.marks.push(Mark::Dot { id, at });
    }

    fn circle(&mut self, id: GraphicId, center: Position, radius: u32) {
        self.marks.push(Mark::Circle { id, center, radius });
    }
}
