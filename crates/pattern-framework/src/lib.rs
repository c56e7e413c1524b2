//! # Pattern Framework
//!
//! This crate provides small, generic building blocks for three classic object-oriented
//! patterns, expressed with Rust traits and ownership instead of class hierarchies:
//!
//! - **Composite**: a tree of [`Graphic`] nodes where a [`Composite`] is itself a `Graphic`.
//! - **Observer**: an [`EventHub`] that fans a payload out to every [`Subscriber`] of an event type.
//! - **Singleton**: a [`Singleton`] cell that constructs its value exactly once per process.
//!
//! ## Architecture Overview
//!
//! The framework knows nothing about dots, circles, files or databases. Those live in the
//! application crate, which plugs into the framework through its traits:
//!
//! 1. **Tree Layer** ([`Graphic`], [`Renderer`], [`Composite`]) - structure and traversal order
//! 2. **Notification Layer** ([`Subscriber`], [`EventHub`]) - registration and synchronous fan-out
//! 3. **Instance Layer** ([`Singleton`]) - guarded one-time construction
//!
//! ## Composite
//!
//! A leaf type implements [`Graphic`] and names the sink it draws into through the
//! associated `Renderer` type. Wrapping leaves in a sum type that embeds
//! `Composite<Self>` gives arbitrarily deep nesting:
//!
//! ```rust
//! use pattern_framework::{Bounds, Composite, Graphic, GraphicId, Position, Renderer};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Renderer for Log {
//!     fn frame(&mut self, group: GraphicId, bounds: Bounds) {
//!         self.0.push(format!("frame {}", bounds));
//!     }
//! }
//!
//! enum Node {
//!     Pin(GraphicId, Position),
//!     Group(Composite<Node>),
//! }
//!
//! impl From<Composite<Node>> for Node {
//!     fn from(group: Composite<Node>) -> Self { Node::Group(group) }
//! }
//!
//! impl Graphic for Node {
//!     type Renderer = Log;
//!
//!     fn id(&self) -> GraphicId {
//!         match self { Node::Pin(id, _) => *id, Node::Group(g) => g.id() }
//!     }
//!     fn move_by(&mut self, dx: i32, dy: i32) {
//!         match self { Node::Pin(_, at) => *at = at.offset(dx, dy), Node::Group(g) => g.move_by(dx, dy) }
//!     }
//!     fn draw(&self, log: &mut Log) {
//!         match self { Node::Pin(_, at) => log.0.push(format!("pin {}", at)), Node::Group(g) => g.draw(log) }
//!     }
//!     fn position(&self) -> Option<Position> {
//!         match self { Node::Pin(_, at) => Some(*at), Node::Group(_) => None }
//!     }
//!     fn bounds(&self) -> Option<Bounds> {
//!         match self { Node::Pin(_, at) => Some(Bounds::at(*at)), Node::Group(g) => g.bounds() }
//!     }
//! }
//!
//! let mut root = Composite::new();
//! root.add(Node::Pin(GraphicId::next(), Position::new(1, 2)));
//! root.add(Node::Pin(GraphicId::next(), Position::new(5, 3)));
//! root.move_by(1, 1);
//!
//! let mut log = Log::default();
//! root.draw(&mut log);
//! assert_eq!(log.0, vec!["pin (2, 3)", "pin (6, 4)", "frame [(2, 3) .. (6, 4)]"]);
//! ```
//!
//! ## Observer
//!
//! Subscribers are shared handles (`Arc<dyn Subscriber<P>>`). Publishing is synchronous and
//! ordered; a faulting subscriber is reported in the [`PublishReport`] and never silences
//! the subscribers after it. See the [`hub`] module for the locking discipline.
//!
//! ## Singleton
//!
//! A [`Singleton`] lives in a `static` and is reached either lazily
//! ([`Singleton::get_or_init`]) or through an explicit startup call ([`Singleton::init`])
//! whose returned handle is passed on to consumers.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockSubscriber`](mock::MockSubscriber), an
//! expectation-driven subscriber for testing publishers without real side effects.

pub mod composite;
pub mod error;
pub mod geometry;
pub mod graphic;
pub mod hub;
pub mod logging;
pub mod mock;
pub mod singleton;
pub mod subscriber;

// Re-export core types for convenience
pub use composite::Composite;
pub use error::{CompositeError, SingletonError, SubscriberError, SubscriberFault};
pub use geometry::{Bounds, GraphicId, Position};
pub use graphic::{Graphic, Renderer};
pub use hub::{EventHub, PublishReport, SubscriberHandle};
pub use singleton::Singleton;
pub use subscriber::Subscriber;
