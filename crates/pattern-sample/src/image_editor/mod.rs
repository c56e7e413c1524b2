//! # Image Editor
//!
//! The client side of the Composite pattern. The editor owns one root
//! [`Composite<Shape>`](pattern_framework::Composite) and works with every shape, leaf or
//! group, through the [`Graphic`] trait.
//!
//! ## Usage
//!
//! ```rust
//! use pattern_sample::canvas::RecordingCanvas;
//! use pattern_sample::image_editor::ImageEditor;
//! use pattern_sample::model::{Circle, Dot, Shape};
//!
//! let mut editor = ImageEditor::new();
//! editor.load();
//!
//! let dot = Dot::new(3, 4);
//! let circle = Circle::new(8, 6, 15);
//! let (dot_id, circle_id) = (dot.id(), circle.id());
//!
//! let mut canvas = RecordingCanvas::new();
//! editor.group_selected(vec![Shape::from(dot), Shape::from(circle)], &mut canvas);
//!
//! editor.move_shape(dot_id, 2, 2);
//! assert_eq!(editor.position_of(dot_id).map(|p| (p.x, p.y)), Some((5, 6)));
//! assert_eq!(editor.position_of(circle_id).map(|p| (p.x, p.y)), Some((8, 6)));
//! ```

use crate::canvas::Canvas;
use crate::model::{Circle, Dot, Shape};
use pattern_framework::{Composite, CompositeError, Graphic, GraphicId, Position};
use tracing::{debug, info, instrument};

/// Holds the whole scene and the operations a user performs on it.
#[derive(Debug, Default)]
pub struct ImageEditor {
    all: Composite<Shape>,
}

impl ImageEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scene with the starter shapes: a dot at (1, 2) and a circle at (5, 3), r=10.
    ///
    /// Returns the ids of the loaded shapes.
    pub fn load(&mut self) -> Vec<GraphicId> {
        self.all = Composite::new();
        let dot = Dot::new(1, 2);
        let circle = Circle::new(5, 3, 10);
        let ids = vec![dot.id(), circle.id()];
        self.all.add(dot.into());
        self.all.add(circle.into());
        info!(root = %self.all.id(), size = self.all.len(), "Scene loaded");
        ids
    }

    pub fn scene(&self) -> &Composite<Shape> {
        &self.all
    }

    /// Adds `shape` at the top level of the scene.
    pub fn add(&mut self, shape: impl Into<Shape>) -> GraphicId {
        let shape = shape.into();
        let id = shape.id();
        self.all.add(shape);
        id
    }

    /// Removes a top-level shape. Unknown ids are ignored.
    pub fn remove(&mut self, id: GraphicId) -> Option<Shape> {
        self.all.remove(id)
    }

    /// Groups `selection` into a new top-level group, then redraws the whole scene.
    ///
    /// Selected shapes already at the top level are moved out of it; shapes coming from
    /// elsewhere are simply added to the group. Returns the new group's id.
    #[instrument(skip(self, selection, canvas), fields(selected = selection.len()))]
    pub fn group_selected(
        &mut self,
        selection: Vec<Shape>,
        canvas: &mut (dyn Canvas + 'static),
    ) -> GraphicId {
        let group_id = self.all.group(selection);
        self.draw(canvas);
        group_id
    }

    /// Groups top-level shapes picked by id. Nothing changes if any id is not top-level.
    pub fn group_by_ids(&mut self, ids: &[GraphicId]) -> Result<GraphicId, CompositeError> {
        self.all.group_children(ids)
    }

    /// Moves the shape with `id`, wherever it sits in the scene. Returns `false` if not found.
    pub fn move_shape(&mut self, id: GraphicId, dx: i32, dy: i32) -> bool {
        match self.all.find_mut(id) {
            Some(shape) => {
                shape.move_by(dx, dy);
                debug!(%id, dx, dy, "Moved");
                true
            }
            None => {
                debug!(%id, "Move skipped, shape not found");
                false
            }
        }
    }

    /// Moves the whole scene.
    pub fn move_all(&mut self, dx: i32, dy: i32) {
        self.all.move_by(dx, dy);
    }

    /// Position of the shape with `id`; `None` for groups and unknown ids.
    pub fn position_of(&self, id: GraphicId) -> Option<Position> {
        self.all.find(id).and_then(Graphic::position)
    }

    /// Draws every shape, then the frame around the whole scene.
    pub fn draw(&self, canvas: &mut (dyn Canvas + 'static)) {
        self.all.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Mark, RecordingCanvas};
    use pattern_framework::Bounds;

    #[test]
    fn test_load_seeds_dot_and_circle() {
        let mut editor = ImageEditor::new();
        let ids = editor.load();

        assert_eq!(editor.scene().len(), 2);
        assert_eq!(editor.position_of(ids[0]), Some(Position::new(1, 2)));
        assert_eq!(editor.position_of(ids[1]), Some(Position::new(5, 3)));
    }

    #[test]
    fn test_group_selected_redraws_scene() {
        let mut editor = ImageEditor::new();
        let loaded = editor.load();
        let dot = Dot::new(3, 4);
        let dot_id = dot.id();

        let mut canvas = RecordingCanvas::new();
        let group_id = editor.group_selected(vec![Shape::from(dot)], &mut canvas);

        assert_eq!(canvas.leaf_ids(), vec![loaded[0], loaded[1], dot_id]);
        assert_eq!(
            canvas.frames(),
            vec![
                (group_id, Bounds::at(Position::new(3, 4))),
                (
                    editor.scene().id(),
                    Bounds {
                        min: Position::new(1, 2),
                        max: Position::new(5, 4),
                    }
                ),
            ]
        );
        assert!(matches!(canvas.marks()[1], Mark::Circle { radius: 10, .. }));
    }

    #[test]
    fn test_move_unknown_shape_is_reported() {
        let mut editor = ImageEditor::new();
        editor.load();
        assert!(!editor.move_shape(GraphicId::next(), 1, 1));
    }
}
