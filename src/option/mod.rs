//! `Opt`: the zero-or-one-value member of the flow family.
//!
//! `Opt<A>` is a closed two-variant type. It satisfies the whole
//! [`Flow`](crate::flow::Flow) contract, but instead of driving a traverser
//! every query and fold dispatches on the variant directly, evaluating
//! predicates and combiners at most once. On top of that it carries the
//! usual monadic surface: `map`, `filter`, `flat_map`, `or`, `match_with`.
//!
//! The type is named `Opt` so it never shadows the prelude `Option`; the two
//! convert into each other losslessly, and a `None` from a nullable input
//! always becomes [`Opt::None`], never a present-but-empty value.
//!
//! ```
//! use flowseq::prelude::*;
//!
//! let port = Opt::from_nullable(std::env::var("FLOWSEQ_UNSET_PORT").ok())
//!     .map(|raw| raw.len())
//!     .or_else(8080);
//! assert_eq!(port, 8080);
//!
//! assert!(Opt::<u8>::none().all_match(|_| false));
//! assert!(!Opt::<u8>::none().any_match(|_| true));
//! ```

mod flow_impl;

use std::hash::{Hash, Hasher};

use crate::flow_error::FlowError;

/// Hash fed for [`Opt::None`].
const EMPTY_HASH: u64 = 0;

/// Zero or one value of type `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Opt<A> {
    Some(A),
    None,
}

impl<A> Default for Opt<A> {
    #[inline]
    fn default() -> Self {
        Opt::None
    }
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

impl<A> Opt<A> {
    /// The empty option, for any `A`.
    #[inline]
    pub const fn none() -> Self {
        Opt::None
    }

    /// A present value.
    #[inline]
    pub fn some(value: A) -> Self {
        Opt::Some(value)
    }

    /// Present iff the nullable input is.
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(v) => Opt::Some(v),
            None => Opt::None,
        }
    }

    /// `Some(value)` if `condition` holds, otherwise `None`.
    #[inline]
    pub fn when(condition: bool, value: A) -> Self {
        if condition { Opt::Some(value) } else { Opt::None }
    }

    /// Like [`when`](Self::when), but `value` only runs if `condition` holds.
    #[inline]
    pub fn when_with<F>(condition: bool, value: F) -> Self
    where
        F: FnOnce() -> A,
    {
        if condition { Opt::Some(value()) } else { Opt::None }
    }
}

// -----------------------------------------------------------------------------
// Accessors
// -----------------------------------------------------------------------------

impl<A> Opt<A> {
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Opt::None)
    }

    #[inline]
    pub fn as_ref(&self) -> Opt<&A> {
        match self {
            Opt::Some(v) => Opt::Some(v),
            Opt::None => Opt::None,
        }
    }

    /// The contained value.
    ///
    /// # Errors
    /// [`FlowError::ElementAbsent`] on `None`.
    #[inline]
    pub fn value(&self) -> Result<&A, FlowError> {
        match self {
            Opt::Some(v) => Ok(v),
            Opt::None => Err(FlowError::ElementAbsent),
        }
    }

    /// Alias of [`value`](Self::value).
    #[inline]
    pub fn get(&self) -> Result<&A, FlowError> {
        self.value()
    }

    /// The contained value, by move.
    ///
    /// # Errors
    /// [`FlowError::ElementAbsent`] on `None`.
    #[inline]
    pub fn or_else_throw(self) -> Result<A, FlowError> {
        self.or_else_throw_with(|| FlowError::ElementAbsent)
    }

    /// The contained value, or the error produced by `error` on `None`.
    #[inline]
    pub fn or_else_throw_with<E, F>(self, error: F) -> Result<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Opt::Some(v) => Ok(v),
            Opt::None => Err(error()),
        }
    }

    /// The contained value, or the absent sentinel.
    #[inline]
    pub fn or_null(&self) -> Option<&A> {
        match self {
            Opt::Some(v) => Some(v),
            Opt::None => None,
        }
    }

    #[inline]
    pub fn or_else(self, other: A) -> A {
        match self {
            Opt::Some(v) => v,
            Opt::None => other,
        }
    }

    /// The contained value, or `other()` evaluated only on `None`.
    #[inline]
    pub fn or_else_with<F>(self, other: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Opt::Some(v) => v,
            Opt::None => other(),
        }
    }

    /// `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Opt<A>) -> Opt<A> {
        match self {
            Opt::Some(_) => self,
            Opt::None => other,
        }
    }

    /// `self` if present, otherwise the option produced by `other`.
    #[inline]
    pub fn or_with<F>(self, other: F) -> Opt<A>
    where
        F: FnOnce() -> Opt<A>,
    {
        match self {
            Opt::Some(_) => self,
            Opt::None => other(),
        }
    }

    /// Total match: exactly one of the branches runs.
    #[inline]
    pub fn match_with<R, S, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(A) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Opt::Some(v) => some(v),
            Opt::None => none(),
        }
    }

    /// Run `action` on the value if present; hand `self` back either way.
    #[inline]
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Opt::Some(v) = &self {
            action(v);
        }
        self
    }
}

// -----------------------------------------------------------------------------
// Hashing and conversions
// -----------------------------------------------------------------------------

/// `Some(v)` hashes exactly like `v`; `None` hashes a fixed constant.
impl<A: Hash> Hash for Opt<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Opt::Some(v) => v.hash(state),
            Opt::None => state.write_u64(EMPTY_HASH),
        }
    }
}

impl<A> From<Option<A>> for Opt<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Opt::from_nullable(value)
    }
}

impl<A> From<Opt<A>> for Option<A> {
    #[inline]
    fn from(value: Opt<A>) -> Self {
        match value {
            Opt::Some(v) => Some(v),
            Opt::None => None,
        }
    }
}

impl<A> IntoIterator for Opt<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<A>::from(self).into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Opt<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.or_null().into_iter()
    }
}
