//! Ready-made traversers: empty, single value, slice window, iterator adapter.

use std::marker::PhantomData;

use super::traverser::{Duplex, DuplexIndexed, Indexed, Traverser};
use crate::flow_error::FlowError;

/// Traverser over nothing.
pub fn empty<A>() -> Empty<A> {
    Empty(PhantomData)
}

/// Traverser yielding `value` once.
pub fn single<A>(value: A) -> Single<A> {
    Single(Some(value))
}

/// Duplex, indexed traverser over the whole slice, positioned at its start.
pub fn of<A>(data: &[A]) -> SliceTraverser<'_, A> {
    SliceTraverser::new(data)
}

/// Traverser over anything iterable.
pub fn adapt<I: IntoIterator>(iterable: I) -> IterTraverser<I::IntoIter> {
    IterTraverser(iterable.into_iter())
}

/// See [`empty`].
#[derive(Debug)]
pub struct Empty<A>(PhantomData<fn() -> A>);

impl<A> Traverser for Empty<A> {
    type Item = A;

    #[inline]
    fn try_next(&mut self, _action: &mut dyn FnMut(A)) -> bool {
        false
    }
}

impl<A> Indexed for Empty<A> {
    #[inline]
    fn try_next_indexed(&mut self, _action: &mut dyn FnMut(usize, A)) -> bool {
        false
    }
}

impl<A> Duplex for Empty<A> {
    #[inline]
    fn try_prev(&mut self, _action: &mut dyn FnMut(A)) -> bool {
        false
    }
}

impl<A> DuplexIndexed for Empty<A> {
    #[inline]
    fn try_prev_indexed(&mut self, _action: &mut dyn FnMut(usize, A)) -> bool {
        false
    }
}

/// See [`single`].
#[derive(Clone, Debug)]
pub struct Single<A>(Option<A>);

impl<A> Traverser for Single<A> {
    type Item = A;

    #[inline]
    fn try_next(&mut self, action: &mut dyn FnMut(A)) -> bool {
        match self.0.take() {
            Some(value) => {
                action(value);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn next_value(&mut self) -> Option<A> {
        self.0.take()
    }
}

impl<A> Single<A> {
    /// Traverser over `value` if present, otherwise over nothing.
    pub(crate) fn from_option(value: Option<A>) -> Self {
        Single(value)
    }
}

/// Duplex, indexed cursor over the window `[lo, hi)` of a slice.
///
/// The cursor sits *between* elements: `try_next` yields the element at the
/// current position and advances, `try_prev` steps back and yields the
/// element it stepped over. Reported positions are absolute slice indices.
#[derive(Debug)]
pub struct SliceTraverser<'a, A> {
    data: &'a [A],
    lo: usize,
    hi: usize,
    px: usize,
}

impl<'a, A> SliceTraverser<'a, A> {
    /// Whole slice, positioned at the start.
    pub fn new(data: &'a [A]) -> Self {
        Self {
            data,
            lo: 0,
            hi: data.len(),
            px: 0,
        }
    }

    /// Whole slice, positioned at the end (for backward drives).
    pub fn at_end(data: &'a [A]) -> Self {
        Self {
            data,
            lo: 0,
            hi: data.len(),
            px: data.len(),
        }
    }

    /// Window `[lo, hi)` starting at `p0`.
    ///
    /// Requires `lo <= hi <= data.len()` and `lo <= p0 <= hi`.
    pub fn with_bounds(data: &'a [A], lo: usize, hi: usize, p0: usize) -> Result<Self, FlowError> {
        if lo > hi || hi > data.len() {
            return Err(FlowError::InvalidArgument(format!(
                "window [{lo}, {hi}) does not fit a slice of {} elements",
                data.len()
            )));
        }
        if p0 < lo || p0 > hi {
            return Err(FlowError::InvalidArgument(format!(
                "start position {p0} lies outside window [{lo}, {hi}]"
            )));
        }
        Ok(Self { data, lo, hi, px: p0 })
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.px
    }

    /// Elements left in forward direction.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.hi - self.px
    }
}

impl<'a, A> Traverser for SliceTraverser<'a, A> {
    type Item = &'a A;

    #[inline]
    fn try_next(&mut self, action: &mut dyn FnMut(&'a A)) -> bool {
        if self.px >= self.hi {
            return false;
        }
        let data = self.data;
        action(&data[self.px]);
        self.px += 1;
        true
    }

    #[inline]
    fn next_value(&mut self) -> Option<&'a A> {
        if self.px >= self.hi {
            return None;
        }
        let data = self.data;
        let value = &data[self.px];
        self.px += 1;
        Some(value)
    }
}

impl<'a, A> Indexed for SliceTraverser<'a, A> {
    #[inline]
    fn try_next_indexed(&mut self, action: &mut dyn FnMut(usize, &'a A)) -> bool {
        if self.px >= self.hi {
            return false;
        }
        let px = self.px;
        self.px += 1;
        action(px, &self.data[px]);
        true
    }
}

impl<'a, A> Duplex for SliceTraverser<'a, A> {
    #[inline]
    fn try_prev(&mut self, action: &mut dyn FnMut(&'a A)) -> bool {
        if self.px <= self.lo {
            return false;
        }
        self.px -= 1;
        action(&self.data[self.px]);
        true
    }
}

impl<'a, A> DuplexIndexed for SliceTraverser<'a, A> {
    #[inline]
    fn try_prev_indexed(&mut self, action: &mut dyn FnMut(usize, &'a A)) -> bool {
        if self.px <= self.lo {
            return false;
        }
        self.px -= 1;
        action(self.px, &self.data[self.px]);
        true
    }
}

/// See [`adapt`].
#[derive(Clone, Debug)]
pub struct IterTraverser<I>(I);

impl<I: Iterator> Traverser for IterTraverser<I> {
    type Item = I::Item;

    #[inline]
    fn try_next(&mut self, action: &mut dyn FnMut(I::Item)) -> bool {
        match self.0.next() {
            Some(value) => {
                action(value);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn next_value(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}
