//! The `Flow` operation contract.
//!
//! A source implements [`Traversable`] and opts into the query and fold
//! algorithms with (usually empty) [`Queryable`] and [`Foldable`] impls.
//! Types with a cheaper direct answer, such as [`Opt`](crate::option::Opt),
//! override individual defaults; the observable semantics stay identical.
//!
//! ```
//! use flowseq::prelude::*;
//!
//! let data = vec![3, 1, 2];
//! assert!(data.any_match(|x| *x == 1));
//! assert!(Vec::<i32>::new().all_match(|_| false));
//! assert_eq!(data.fold_left(0, |acc, x| acc + x), 6);
//! ```

pub mod fold;
pub mod query;
pub mod transform;
pub mod traversable;

pub use fold::Foldable;
pub use query::Queryable;
pub use transform::Transformable;
pub use traversable::{Generate, Traversable, generate};

/// Full query and fold surface of a source.
pub trait Flow: Queryable + Foldable {}

impl<T: Queryable + Foldable + ?Sized> Flow for T {}
