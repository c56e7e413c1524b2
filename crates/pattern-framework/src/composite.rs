//! # Generic Composite
//!
//! This module defines [`Composite`], an ordered collection of [`Graphic`] nodes that is
//! itself a `Graphic`. Operations on a composite are forwarded to every child in
//! insertion order, so a whole hierarchy can be moved or drawn through one call.
//!
//! ## Ownership
//!
//! The composite owns its children. Membership changes only through [`Composite::add`],
//! [`Composite::remove`] and the grouping operations; removing a non-member is a no-op.
//! Because children are owned values, a tree can never contain a cycle.

use crate::error::CompositeError;
use crate::geometry::{Bounds, GraphicId, Position};
use crate::graphic::{Graphic, Renderer};
use tracing::{debug, info, warn};

/// An ordered group of graphics that behaves like a single graphic.
///
/// # Example
/// ```ignore
/// let mut root = Composite::new();
/// root.add(Shape::from(Dot::new(1, 2)));
/// root.add(Shape::from(Circle::new(5, 3, 10)));
///
/// root.move_by(2, 2);        // moves every descendant
/// root.draw(&mut canvas);    // draws children, then the bounding frame
/// ```
#[derive(Debug, Clone)]
pub struct Composite<G> {
    id: GraphicId,
    children: Vec<G>,
}

impl<G: Graphic> Default for Composite<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Graphic> Composite<G> {
    /// Creates an empty composite with a fresh id.
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    /// Creates a composite owning `children`, in the given order.
    pub fn with_children(children: Vec<G>) -> Self {
        Self::with_id(GraphicId::next(), children)
    }

    pub fn with_id(id: GraphicId, children: Vec<G>) -> Self {
        Self { id, children }
    }

    /// Appends `child` as the last direct child.
    pub fn add(&mut self, child: G) {
        debug!(group = %self.id, child = %child.id(), "Add");
        self.children.push(child);
    }

    /// Removes the direct child with `id`, returning it.
    ///
    /// Returns `None` (and changes nothing) when `id` is not a direct child.
    pub fn remove(&mut self, id: GraphicId) -> Option<G> {
        let Some(index) = self.children.iter().position(|child| child.id() == id) else {
            debug!(group = %self.id, child = %id, "Remove skipped, not a member");
            return None;
        };
        debug!(group = %self.id, child = %id, "Remove");
        Some(self.children.remove(index))
    }

    /// Whether `id` is a direct child.
    pub fn contains(&self, id: GraphicId) -> bool {
        self.children.iter().any(|child| child.id() == id)
    }

    pub fn children(&self) -> &[G] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds a graphic by id anywhere below this composite (depth-first).
    pub fn find(&self, id: GraphicId) -> Option<&G> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Some(group) = child.as_composite() {
                if let Some(found) = group.find(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Finds a mutable graphic by id anywhere below this composite (depth-first).
    pub fn find_mut(&mut self, id: GraphicId) -> Option<&mut G> {
        for child in &mut self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Some(group) = child.as_composite_mut() {
                if let Some(found) = group.find_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Every descendant leaf, depth-first in insertion order.
    pub fn leaves(&self) -> Vec<&G> {
        let mut leaves = Vec::new();
        collect_leaves(&self.children, &mut leaves);
        leaves
    }

    /// Moves `selection` into a new composite and adds that composite as the last child.
    ///
    /// Every selected graphic that is a direct child is removed first; selections that
    /// are not members are simply taken into the new group. The new group holds exactly
    /// `selection`, in the given order. Nothing here can fail part-way.
    ///
    /// Returns the id of the new group.
    pub fn group(&mut self, selection: Vec<G>) -> GraphicId
    where
        G: From<Composite<G>>,
    {
        for selected in &selection {
            self.remove(selected.id());
        }
        let group = Composite::with_children(selection);
        let group_id = group.id;
        info!(root = %self.id, group = %group_id, size = group.len(), "Grouped");
        self.add(G::from(group));
        group_id
    }

    /// Like [`Composite::group`], but selects existing direct children by id.
    ///
    /// The selection is validated before anything moves: if any id is not a direct
    /// child, or appears twice, the tree is left untouched.
    pub fn group_children(&mut self, ids: &[GraphicId]) -> Result<GraphicId, CompositeError>
    where
        G: From<Composite<G>>,
    {
        for (index, id) in ids.iter().enumerate() {
            if ids[..index].contains(id) {
                warn!(root = %self.id, child = %id, "Group rejected, duplicate selection");
                return Err(CompositeError::DuplicateSelection(*id));
            }
            if !self.contains(*id) {
                warn!(root = %self.id, child = %id, "Group rejected, not a child");
                return Err(CompositeError::NotAChild(*id));
            }
        }
        let selection = ids.iter().filter_map(|id| self.remove(*id)).collect();
        Ok(self.group(selection))
    }
}

fn collect_leaves<'a, G: Graphic>(children: &'a [G], leaves: &mut Vec<&'a G>) {
    for child in children {
        match child.as_composite() {
            Some(group) => collect_leaves(&group.children, leaves),
            None => leaves.push(child),
        }
    }
}

impl<G: Graphic> Graphic for Composite<G> {
    type Renderer = G::Renderer;

    fn id(&self) -> GraphicId {
        self.id
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    fn draw(&self, renderer: &mut Self::Renderer) {
        for child in &self.children {
            child.draw(renderer);
        }
        match self.bounds() {
            Some(bounds) => renderer.frame(self.id, bounds),
            None => debug!(group = %self.id, "Empty group, no frame"),
        }
    }

    /// Composites have no position of their own. Use [`Graphic::bounds`] instead.
    fn position(&self) -> Option<Position> {
        None
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.children.iter().filter_map(Graphic::bounds))
    }
}
