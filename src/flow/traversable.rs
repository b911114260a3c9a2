//! The source capability every flow operation is derived from.

use crate::traversal::{IterTraverser, SliceTraverser, Traverser, adapt};

/// Anything that can hand out a fresh [`Traverser`] over its elements.
///
/// Borrowing sources (slices, `Vec`, [`Opt`](crate::option::Opt)) yield
/// `&'a A`; generating sources yield owned values.
pub trait Traversable {
    type Item<'a>
    where
        Self: 'a;

    type Traverser<'a>: Traverser<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// A fresh cursor positioned before the first element.
    fn traverser(&self) -> Self::Traverser<'_>;
}

impl<A> Traversable for [A] {
    type Item<'a>
        = &'a A
    where
        Self: 'a;

    type Traverser<'a>
        = SliceTraverser<'a, A>
    where
        Self: 'a;

    #[inline]
    fn traverser(&self) -> SliceTraverser<'_, A> {
        SliceTraverser::new(self)
    }
}

impl<A> Traversable for Vec<A> {
    type Item<'a>
        = &'a A
    where
        Self: 'a;

    type Traverser<'a>
        = SliceTraverser<'a, A>
    where
        Self: 'a;

    #[inline]
    fn traverser(&self) -> SliceTraverser<'_, A> {
        SliceTraverser::new(self.as_slice())
    }
}

/// Source backed by a generator: every traversal calls the closure again
/// and walks whatever it produces.
///
/// Operations that traverse more than once rerun the generator each time.
/// The default [`Foldable::collect`](crate::flow::Foldable::collect) walks
/// the source once to size the container and once to fill it, so a
/// side-effecting generator runs twice per `collect`.
///
/// ```
/// use flowseq::prelude::*;
///
/// let evens = generate(|| (0..10).filter(|n| n % 2 == 0));
/// assert!(evens.all_match(|n| n % 2 == 0));
/// assert_eq!(evens.fold_left(0, |acc, n| acc + n), 20);
/// ```
#[derive(Clone, Debug)]
pub struct Generate<F>(F);

/// Wrap a generator closure as a [`Traversable`] source.
pub fn generate<F, I>(generator: F) -> Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Generate(generator)
}

impl<F, I> Traversable for Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item<'a>
        = I::Item
    where
        Self: 'a;

    type Traverser<'a>
        = IterTraverser<I::IntoIter>
    where
        Self: 'a;

    fn traverser(&self) -> IterTraverser<I::IntoIter> {
        adapt((self.0)())
    }
}
