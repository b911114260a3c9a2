//! Left fold, counting and mutable collection.

use super::traversable::{Generate, Traversable};
use crate::flow_error::FlowError;
use crate::traversal::Traverser;

/// Accumulating operations.
pub trait Foldable: Traversable {
    /// Number of elements. The default walks the source once; sources that
    /// know their size should override it.
    fn count(&self) -> usize {
        let mut n = 0usize;
        self.traverser().for_next(|_| n += 1);
        n
    }

    /// Left fold: `combiner(…combiner(combiner(initial, e1), e2)…, en)`.
    ///
    /// Returns `initial` untouched on an empty source.
    fn fold_left<'a, Z, F>(&'a self, initial: Z, mut combiner: F) -> Z
    where
        F: FnMut(Z, Self::Item<'a>) -> Z,
    {
        let mut traverser = self.traverser();
        let mut state = initial;
        while let Some(x) = traverser.next_value() {
            state = combiner(state, x);
        }
        state
    }

    /// Fallible [`fold_left`](Self::fold_left); stops at the first error.
    fn try_fold_left<'a, Z, E, F>(&'a self, initial: Z, mut combiner: F) -> Result<Z, E>
    where
        F: FnMut(Z, Self::Item<'a>) -> Result<Z, E>,
    {
        let mut traverser = self.traverser();
        let mut state = initial;
        while let Some(x) = traverser.next_value() {
            state = combiner(state, x)?;
        }
        Ok(state)
    }

    /// Fold the elements into a container by mutation.
    ///
    /// `factory` runs exactly once and receives the element count as a size
    /// hint; `accumulator` then runs once per element, in order, against that
    /// same container, which is returned. Unless `count` is overridden the
    /// source is walked twice.
    ///
    /// # Errors
    /// [`FlowError::SizeOverflow`] if the count does not fit the `u32` hint.
    /// The factory is not invoked in that case.
    fn collect<'a, C, F, G>(&'a self, factory: F, mut accumulator: G) -> Result<C, FlowError>
    where
        F: FnOnce(u32) -> C,
        G: FnMut(&mut C, Self::Item<'a>),
    {
        let hint = size_hint(self.count())?;
        let mut container = factory(hint);
        self.traverser()
            .for_next(|x| accumulator(&mut container, x));
        Ok(container)
    }
}

/// Narrow an element count into the bounded container size hint.
pub(crate) fn size_hint(count: usize) -> Result<u32, FlowError> {
    num_traits::cast::<usize, u32>(count).ok_or(FlowError::SizeOverflow { count })
}

impl<A> Foldable for [A] {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<A> Foldable for Vec<A> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<F, I> Foldable for Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
}
