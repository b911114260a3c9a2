//! # flowseq
//!
//! flowseq is a small library of traversal-driven collection abstractions: a
//! push-style cursor protocol with cooperative early exit, the query and fold
//! operations every source gets from it, a zero-or-one-value type that
//! satisfies the same contract, and an ordered, indexable sequence contract.
//!
//! ## Layers
//! - [`traversal`]: [`Traverser`](traversal::Traverser) cursors, the
//!   [`Control`](traversal::Control) exit handle and the
//!   [`Drive`](traversal::Drive) outcome of a controlled drive, plus the
//!   stock sources (`empty`, `single`, `of`, `adapt`).
//! - [`flow`]: [`Traversable`](flow::Traversable) sources and the
//!   [`Queryable`](flow::Queryable) / [`Foldable`](flow::Foldable)
//!   operations (`contains`, `any_match`, `all_match`, `none_match`,
//!   `fold_left`, `collect`) derived from traversal.
//! - [`option`]: [`Opt`](option::Opt), answering every flow operation
//!   directly from its variant.
//! - [`seq`]: the [`Seq`](seq::Seq) contract of indexable sequences.
//!
//! ## Invariant checking
//! Sequences derived by `sort_by`, `reverse`, `take_while` and `drop_while`
//! are validated through [`DebugInvariants`] in debug builds. Enable the
//! `strict-invariants` or `check-invariants` feature to keep the checks in
//! release builds:
//!
//! ```toml
//! [dependencies]
//! flowseq = { version = "0.1", features = ["check-invariants"] }
//! ```
//!
//! ## Logging
//! The crate logs through the [`log`] facade only: drive outcomes at `trace`,
//! invariant validation at `debug`. Install any `log` backend to see them.
//!
//! ```
//! use flowseq::prelude::*;
//!
//! let readings = vec![12, 17, 9, 21];
//! assert!(readings.any_match(|r| *r > 20));
//! assert!(!readings.all_match(|r| *r > 10));
//!
//! let alert = Opt::when(readings.contains(&21), "threshold crossed");
//! assert_eq!(alert.or_else("ok"), "threshold crossed");
//! ```

pub mod debug_invariants;
pub mod flow;
pub mod flow_error;
pub mod option;
pub mod seq;
pub mod traversal;

pub use debug_invariants::DebugInvariants;
pub use flow_error::FlowError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::flow::{
        Flow, Foldable, Generate, Queryable, Transformable, Traversable, generate,
    };
    pub use crate::flow_error::FlowError;
    pub use crate::option::Opt;
    pub use crate::seq::Seq;
    pub use crate::traversal::{
        Control, Drive, Duplex, DuplexIndexed, Indexed, Traverser,
    };
}
