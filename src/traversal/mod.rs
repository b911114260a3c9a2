//! Traversal protocol: push cursors with cooperative early exit.
//!
//! A source hands out a fresh [`Traverser`] per drive. Consumers either
//! drive it to exhaustion ([`Traverser::for_next`]) or under a [`Control`]
//! handle that lets them stop after the current element
//! ([`Traverser::while_next`]), which reports the [`Drive`] outcome.

pub mod control;
pub mod sources;
pub mod traverser;

pub use control::{Control, Drive};
pub use sources::{Empty, IterTraverser, Single, SliceTraverser, adapt, empty, of, single};
pub use traverser::{Duplex, DuplexIndexed, Indexed, Traverser, Values};
