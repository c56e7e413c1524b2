//! Shapes managed by the [`ImageEditor`](crate::image_editor::ImageEditor).
//!
//! # Composite Pattern
//! [`Shape`] implements the [`Graphic`](pattern_framework::Graphic) trait, so a single
//! [`Dot`], a [`Circle`] and a whole [`Group`](Shape::Group) of shapes are all handled
//! through the same `move_by` / `draw` / `position` calls.
//!
//! A circle *is not* a dot here: it composes one for its center instead of inheriting
//! from it.

use crate::canvas::Canvas;
use pattern_framework::{Bounds, Composite, Graphic, GraphicId, Position};
use serde::{Deserialize, Serialize};

/// A single point on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot {
    id: GraphicId,
    position: Position,
}

impl Dot {
    /// Creates a dot at `(x, y)` with a fresh id.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            id: GraphicId::next(),
            position: Position::new(x, y),
        }
    }

    pub fn id(&self) -> GraphicId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }
}

/// A circle, positioned by its center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    center: Dot,
    radius: u32,
}

impl Circle {
    /// Creates a circle centered at `(x, y)` with a fresh id.
    pub fn new(x: i32, y: i32, radius: u32) -> Self {
        Self {
            center: Dot::new(x, y),
            radius,
        }
    }

    pub fn id(&self) -> GraphicId {
        self.center.id()
    }

    pub fn center(&self) -> Position {
        self.center.position()
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.center.move_by(dx, dy);
    }
}

/// Any node of the editor's scene.
#[derive(Debug, Clone)]
pub enum Shape {
    Dot(Dot),
    Circle(Circle),
    Group(Composite<Shape>),
}

impl Shape {
    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }
}

impl From<Dot> for Shape {
    fn from(dot: Dot) -> Self {
        Shape::Dot(dot)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Composite<Shape>> for Shape {
    fn from(group: Composite<Shape>) -> Self {
        Shape::Group(group)
    }
}

impl Graphic for Shape {
    type Renderer = dyn Canvas;

    fn id(&self) -> GraphicId {
        match self {
            Shape::Dot(dot) => dot.id(),
            Shape::Circle(circle) => circle.id(),
            Shape::Group(group) => group.id(),
        }
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Dot(dot) => dot.move_by(dx, dy),
            Shape::Circle(circle) => circle.move_by(dx, dy),
            Shape::Group(group) => group.move_by(dx, dy),
        }
    }

    fn draw(&self, canvas: &mut Self::Renderer) {
        match self {
            Shape::Dot(dot) => canvas.dot(dot.id(), dot.position()),
            Shape::Circle(circle) => canvas.circle(circle.id(), circle.center(), circle.radius()),
            Shape::Group(group) => group.draw(canvas),
        }
    }

    fn position(&self) -> Option<Position> {
        match self {
            Shape::Dot(dot) => Some(dot.position()),
            Shape::Circle(circle) => Some(circle.center()),
            Shape::Group(_) => None,
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Group(group) => group.bounds(),
            leaf => leaf.position().map(Bounds::at),
        }
    }

    fn as_composite(&self) -> Option<&Composite<Shape>> {
        match self {
            Shape::Group(group) => Some(group),
            _ => None,
        }
    }

    fn as_composite_mut(&mut self) -> Option<&mut Composite<Shape>> {
        match self {
            Shape::Group(group) => Some(group),
            _ => None,
        }
    }
}
