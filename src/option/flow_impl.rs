//! `Opt` as a flow source. Every operation answers from the variant.

use std::borrow::Borrow;

use super::Opt;
use crate::flow::fold::size_hint;
use crate::flow::{Foldable, Queryable, Transformable, Traversable};
use crate::flow_error::FlowError;
use crate::traversal::Single;

impl<A> Traversable for Opt<A> {
    type Item<'a>
        = &'a A
    where
        Self: 'a;

    type Traverser<'a>
        = Single<&'a A>
    where
        Self: 'a;

    #[inline]
    fn traverser(&self) -> Single<&A> {
        Single::from_option(self.or_null())
    }
}

impl<A> Queryable for Opt<A> {
    fn contains<'a, V>(&'a self, value: &V) -> bool
    where
        Self::Item<'a>: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        match self {
            Opt::Some(v) => <Self::Item<'a> as Borrow<V>>::borrow(&v) == value,
            Opt::None => false,
        }
    }

    fn any_match<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        match self {
            Opt::Some(v) => predicate(v),
            Opt::None => false,
        }
    }

    fn all_match<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        match self {
            Opt::Some(v) => predicate(v),
            Opt::None => true,
        }
    }

    fn none_match<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        match self {
            Opt::Some(v) => !predicate(v),
            Opt::None => true,
        }
    }

    fn try_any_match<'a, E, P>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(Self::Item<'a>) -> Result<bool, E>,
    {
        match self {
            Opt::Some(v) => predicate(v),
            Opt::None => Ok(false),
        }
    }

    fn try_all_match<'a, E, P>(&'a self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(Self::Item<'a>) -> Result<bool, E>,
    {
        match self {
            Opt::Some(v) => predicate(v),
            Opt::None => Ok(true),
        }
    }
}

impl<A> Foldable for Opt<A> {
    #[inline]
    fn count(&self) -> usize {
        usize::from(self.is_present())
    }

    fn fold_left<'a, Z, F>(&'a self, initial: Z, mut combiner: F) -> Z
    where
        F: FnMut(Z, Self::Item<'a>) -> Z,
    {
        match self {
            Opt::Some(v) => combiner(initial, v),
            Opt::None => initial,
        }
    }

    fn try_fold_left<'a, Z, E, F>(&'a self, initial: Z, mut combiner: F) -> Result<Z, E>
    where
        F: FnMut(Z, Self::Item<'a>) -> Result<Z, E>,
    {
        match self {
            Opt::Some(v) => combiner(initial, v),
            Opt::None => Ok(initial),
        }
    }

    fn collect<'a, C, F, G>(&'a self, factory: F, mut accumulator: G) -> Result<C, FlowError>
    where
        F: FnOnce(u32) -> C,
        G: FnMut(&mut C, Self::Item<'a>),
    {
        let mut container = factory(size_hint(Foldable::count(self))?);
        if let Opt::Some(v) = self {
            accumulator(&mut container, v);
        }
        Ok(container)
    }
}

impl<A> Transformable for Opt<A> {
    type Value = A;
    type Mapped<B> = Opt<B>;

    fn map<B, F>(self, mut mapper: F) -> Opt<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Opt::Some(v) => Opt::Some(mapper(v)),
            Opt::None => Opt::None,
        }
    }

    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Opt::Some(v) if predicate(&v) => Opt::Some(v),
            _ => Opt::None,
        }
    }

    /// Keeps only the first element the mapper produces; `None` never calls
    /// the mapper.
    fn flat_map<B, I, F>(self, mut mapper: F) -> Opt<B>
    where
        F: FnMut(A) -> I,
        I: IntoIterator<Item = B>,
    {
        match self {
            Opt::Some(v) => Opt::from_nullable(mapper(v).into_iter().next()),
            Opt::None => Opt::None,
        }
    }

    fn peek<F>(self, mut action: F) -> Self
    where
        F: FnMut(&A),
    {
        if let Opt::Some(v) = &self {
            action(v);
        }
        self
    }
}
