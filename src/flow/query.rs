//! Membership and quantification, derived from controlled traversal.

use std::borrow::Borrow;

use super::traversable::{Generate, Traversable};
use crate::traversal::Traverser;

/// Membership and quantifier queries.
///
/// Every default drives a fresh traverser with
/// [`while_next`](Traverser::while_next) and reads the [`Drive`] outcome:
/// the predicate runs at most once per visited element and never past the
/// element that decided the answer.
///
/// On an empty source `any_match` is false while `all_match` and
/// `none_match` are vacuously true.
///
/// [`Drive`]: crate::traversal::Drive
pub trait Queryable: Traversable {
    /// Whether some element is structurally equal to `value`.
    fn contains<'a, V>(&'a self, value: &V) -> bool
    where
        Self::Item<'a>: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        self.traverser()
            .while_next(|control, x| {
                if <Self::Item<'a> as Borrow<V>>::borrow(&x) == value {
                    control.exit();
                }
            })
            .exited()
    }

    /// ∃x. P(x)
    fn any_match<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.traverser()
            .while_next(|control, x| {
                if predicate(x) {
                    control.exit();
                }
            })
            .exited()
    }

    /// ∀x. P(x)
    fn all_match<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.traverser()
            .while_next(|control, x| {
                if !predicate(x) {
                    control.exit();
                }
            })
            .completed()
    }

    /// ∀x. ¬P(x)
    fn none_match<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.traverser()
            .while_next(|control, x| {
                if predicate(x) {
                    control.exit();
                }
            })
            .completed()
    }

    /// [`any_match`](Self::any_match) with a fallible predicate. The first
    /// error aborts the query and is returned unmodified.
    fn try_any_match<'a, E, P>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(Self::Item<'a>) -> Result<bool, E>,
    {
        let outcome = self.traverser().try_while_next::<E, _>(|control, x| {
            if predicate(x)? {
                control.exit();
            }
            Ok(())
        })?;
        Ok(outcome.exited())
    }

    /// [`all_match`](Self::all_match) with a fallible predicate.
    fn try_all_match<'a, E, P>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(Self::Item<'a>) -> Result<bool, E>,
    {
        let outcome = self.traverser().try_while_next::<E, _>(|control, x| {
            if !predicate(x)? {
                control.exit();
            }
            Ok(())
        })?;
        Ok(outcome.completed())
    }
}

impl<A> Queryable for [A] {}

impl<A> Queryable for Vec<A> {}

impl<F, I> Queryable for Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
}
