//! # Graphic Trait
//!
//! The `Graphic` trait defines the contract every node of a component tree implements:
//! leaves (a dot, a circle) and composites alike. Callers work through this trait and
//! never need to know whether they hold a single shape or a whole hierarchy.
//!
//! # Architecture Note
//! Rendering is not the graphic's job. Each graphic names the kind of sink it draws
//! into through the associated `Renderer` type, and the sink decides *how* to render.
//! The tree only guarantees *which* nodes are drawn and in *what order*.

use crate::composite::Composite;
use crate::geometry::{Bounds, GraphicId, Position};

/// The minimal rendering sink shared by every tree.
///
/// Composites draw a frame around their children's bounds; leaf-specific drawing
/// methods live on richer sinks that extend this trait.
pub trait Renderer {
    /// Render the bounding frame of the composite `group`.
    fn frame(&mut self, group: GraphicId, bounds: Bounds);
}

/// A node in a component tree.
///
/// # Provided Methods
/// - [`Graphic::bounds`] defaults to the degenerate bounds of [`Graphic::position`].
/// - [`Graphic::as_composite`] / [`Graphic::as_composite_mut`] default to `None`. Sum
///   types that embed a [`Composite`] override them so that tree-wide searches can
///   descend into nested groups.
pub trait Graphic {
    /// The sink this graphic draws into.
    type Renderer: Renderer + ?Sized;

    fn id(&self) -> GraphicId;

    /// Moves the graphic by `(dx, dy)`. Never fails.
    ///
    /// Coordinates use wrapping arithmetic: moving past `i32::MAX` continues from
    /// `i32::MIN` (see [`Position::offset`]).
    fn move_by(&mut self, dx: i32, dy: i32);

    /// Performs the variant-specific rendering side effect.
    fn draw(&self, renderer: &mut Self::Renderer);

    /// The graphic's own position. Composites have none and return `None`.
    fn position(&self) -> Option<Position>;

    fn bounds(&self) -> Option<Bounds> {
        self.position().map(Bounds::at)
    }

    fn as_composite(&self) -> Option<&Composite<Self>>
    where
        Self: Sized,
    {
        None
    }

    fn as_composite_mut(&mut self) -> Option<&mut Composite<Self>>
    where
        Self: Sized,
    {
        None
    }
}
