//! # Geometry Primitives
//!
//! Integer positions, axis-aligned bounds and the identifiers every graphic carries.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GRAPHIC_ID: AtomicU32 = AtomicU32::new(1);

/// Type-safe identifier for graphics (leaves and composites alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphicId(pub u32);

impl GraphicId {
    /// Allocates a fresh, process-unique id.
    pub fn next() -> Self {
        Self(NEXT_GRAPHIC_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<u32> for GraphicId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for GraphicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "graphic_{}", self.0)
    }
}

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    ///
    /// Coordinates wrap around on overflow, so a shift never fails.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding rectangle, inclusive on both corners.
///
/// A single position yields a degenerate rectangle where `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    /// The degenerate bounds of a single position.
    pub const fn at(position: Position) -> Self {
        Self {
            min: position,
            max: position,
        }
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min: Position::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Position::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Min/max reduction over any number of bounds. `None` when the input is empty.
    pub fn enclosing(bounds: impl IntoIterator<Item = Bounds>) -> Option<Self> {
        bounds.into_iter().reduce(Bounds::union)
    }

    pub fn width(&self) -> u32 {
        self.min.x.abs_diff(self.max.x)
    }

    pub fn height(&self) -> u32 {
        self.min.y.abs_diff(self.max.y)
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.y)
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
