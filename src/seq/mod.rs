//! Ordered, indexable sequences.
//!
//! [`Seq`] extends the flow contract with positions `0..count()`, a
//! bidirectional cursor, and the order-dependent operations built on it:
//! index lookup, right folds, reduction, sorting and slicing by predicate.
//! Implementors supply `cursor`, `cursor_at_end`, `get`, `as_elem` and an
//! O(1) [`Foldable::count`]; every other operation is a default. The flow
//! traverser and the cursor walk the same elements.
//!
//! Sequences are value-like. Operations that "change" a sequence build a
//! new one through [`FromIterator`], cloning the elements they keep.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};

use itertools::Itertools;

use crate::flow::{Foldable, Queryable};
use crate::flow_error::FlowError;
use crate::option::Opt;
use crate::traversal::{Duplex, DuplexIndexed, Indexed, Traverser};

/// Multiplier of the order-sensitive sequence hash.
const HASH_FACTOR: u64 = 31;
/// Hash of the empty sequence.
const HASH_SEED: u64 = 1;

/// An ordered sequence with index domain `[0, count())`.
pub trait Seq: Queryable + Foldable {
    type Elem;

    type Cursor<'a>: DuplexIndexed<Item = &'a Self::Elem>
    where
        Self: 'a;

    /// Cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Cursor positioned after the last element, for reverse walks.
    fn cursor_at_end(&self) -> Self::Cursor<'_>;

    /// Element at `idx`, or `None` outside `[0, count())`.
    fn get(&self, idx: usize) -> Option<&Self::Elem>;

    /// The element a flow item refers to.
    ///
    /// `traverser()` must visit exactly the elements `cursor()` visits, in
    /// the same order; [`validate_invariants`] checks this through `as_elem`.
    ///
    /// [`validate_invariants`]: crate::debug_invariants::DebugInvariants::validate_invariants
    fn as_elem<'a>(item: Self::Item<'a>) -> &'a Self::Elem
    where
        Self: 'a;

    // ---------------------------------------------------------------------
    // Positional access
    // ---------------------------------------------------------------------

    fn is_empty(&self) -> bool {
        Foldable::count(self) == 0
    }

    /// Element at `idx`.
    ///
    /// # Errors
    /// [`FlowError::OutOfBounds`] outside `[0, count())`.
    fn at(&self, idx: usize) -> Result<&Self::Elem, FlowError> {
        self.get(idx).ok_or_else(|| FlowError::OutOfBounds {
            index: idx,
            count: Foldable::count(self),
        })
    }

    fn first(&self) -> Opt<&Self::Elem> {
        Opt::from_nullable(self.cursor().next_value())
    }

    fn last(&self) -> Opt<&Self::Elem> {
        Opt::from_nullable(self.cursor_at_end().prev_value())
    }

    /// The only element, if the sequence holds exactly one.
    fn single(&self) -> Opt<&Self::Elem> {
        let mut cursor = self.cursor();
        match (cursor.next_value(), cursor.next_value()) {
            (Some(only), None) => Opt::some(only),
            _ => Opt::none(),
        }
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    /// Position of the first element equal to `value`.
    fn index_of<V>(&self, value: &V) -> Option<usize>
    where
        Self::Elem: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        self.index_where(|x| <Self::Elem as Borrow<V>>::borrow(x) == value)
    }

    /// Position of the last element equal to `value`.
    fn last_index_of<V>(&self, value: &V) -> Option<usize>
    where
        Self::Elem: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        self.last_index_where(|x| <Self::Elem as Borrow<V>>::borrow(x) == value)
    }

    fn index_where<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        let mut found = None;
        self.cursor().while_next_indexed(|control, idx, x| {
            if predicate(x) {
                found = Some(idx);
                control.exit();
            }
        });
        found
    }

    fn last_index_where<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        let mut found = None;
        self.cursor_at_end().while_prev_indexed(|control, idx, x| {
            if predicate(x) {
                found = Some(idx);
                control.exit();
            }
        });
        found
    }

    /// First element satisfying `predicate`.
    fn find<P>(&self, mut predicate: P) -> Opt<&Self::Elem>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        let mut found = None;
        self.cursor().while_next(|control, x| {
            if predicate(x) {
                found = Some(x);
                control.exit();
            }
        });
        Opt::from_nullable(found)
    }

    /// Last element satisfying `predicate`, found by walking backward.
    fn find_last<P>(&self, mut predicate: P) -> Opt<&Self::Elem>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        let mut found = None;
        self.cursor_at_end().while_prev(|control, x| {
            if predicate(x) {
                found = Some(x);
                control.exit();
            }
        });
        Opt::from_nullable(found)
    }

    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        let mut n = 0usize;
        self.cursor().for_next(|x| {
            if predicate(x) {
                n += 1;
            }
        });
        n
    }

    /// Number of elements equal to `value`.
    fn count_of<V>(&self, value: &V) -> usize
    where
        Self::Elem: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        self.count_where(|x| <Self::Elem as Borrow<V>>::borrow(x) == value)
    }

    /// Whether every one of `values` occurs in the sequence. Vacuously true
    /// for no values.
    fn contains_all<'v, V, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v V>,
        Self::Elem: Borrow<V>,
        V: PartialEq + ?Sized + 'v,
    {
        values
            .into_iter()
            .all(|value| self.index_of(value).is_some())
    }

    /// First minimum under `compare`.
    fn min_by<F>(&self, mut compare: F) -> Opt<&Self::Elem>
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Ordering,
    {
        Opt::from_nullable(self.cursor().values().min_by(|a, b| compare(*a, *b)))
    }

    /// Last maximum under `compare`.
    fn max_by<F>(&self, mut compare: F) -> Opt<&Self::Elem>
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Ordering,
    {
        Opt::from_nullable(self.cursor().values().max_by(|a, b| compare(*a, *b)))
    }

    // ---------------------------------------------------------------------
    // Right-to-left accumulation
    // ---------------------------------------------------------------------

    /// Right fold: `combiner(e1, combiner(e2, …combiner(en, initial)…))`.
    fn fold_right<Z, F>(&self, initial: Z, mut combiner: F) -> Z
    where
        F: FnMut(&Self::Elem, Z) -> Z,
    {
        let mut cursor = self.cursor_at_end();
        let mut state = initial;
        while let Some(x) = cursor.prev_value() {
            state = combiner(x, state);
        }
        state
    }

    /// Right-to-left reduction seeded with the last element; `None` when
    /// empty. `accumulator(element, state)` should be associative.
    fn reduce<F>(&self, mut accumulator: F) -> Opt<Self::Elem>
    where
        Self::Elem: Clone,
        F: FnMut(&Self::Elem, Self::Elem) -> Self::Elem,
    {
        let mut cursor = self.cursor_at_end();
        let Some(last) = cursor.prev_value() else {
            return Opt::none();
        };
        let mut state = last.clone();
        while let Some(x) = cursor.prev_value() {
            state = accumulator(x, state);
        }
        Opt::some(state)
    }

    /// Right-to-left reduction starting from `identity`, which must be
    /// neutral for `accumulator`.
    fn reduce_with_identity<F>(&self, identity: Self::Elem, accumulator: F) -> Self::Elem
    where
        F: FnMut(&Self::Elem, Self::Elem) -> Self::Elem,
    {
        self.fold_right(identity, accumulator)
    }

    // ---------------------------------------------------------------------
    // Derived sequences
    // ---------------------------------------------------------------------

    /// Stable sort under `compare`.
    fn sort_by<F>(&self, mut compare: F) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone,
        F: FnMut(&Self::Elem, &Self::Elem) -> Ordering,
    {
        let mut order: Vec<&Self::Elem> = self.cursor().values().collect();
        order.sort_by(|a, b| compare(*a, *b));
        let sorted: Self = order.into_iter().cloned().collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&sorted),
            "Seq::sort_by"
        );
        sorted
    }

    /// Stable sort in natural order.
    fn sorted(&self) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone + Ord,
    {
        self.sort_by(Ord::cmp)
    }

    fn reverse(&self) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone,
    {
        let mut cursor = self.cursor_at_end();
        let reversed: Self = std::iter::from_fn(|| cursor.prev_value())
            .cloned()
            .collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&reversed),
            "Seq::reverse"
        );
        reversed
    }

    /// Longest prefix whose elements all satisfy `predicate`.
    fn take_while<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone,
        P: FnMut(&Self::Elem) -> bool,
    {
        let prefix: Self = self
            .cursor()
            .values()
            .take_while(|x| predicate(*x))
            .cloned()
            .collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&prefix),
            "Seq::take_while"
        );
        prefix
    }

    /// Everything after the longest prefix satisfying `predicate`.
    fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone,
        P: FnMut(&Self::Elem) -> bool,
    {
        let suffix: Self = self
            .cursor()
            .values()
            .skip_while(|x| predicate(*x))
            .cloned()
            .collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&suffix),
            "Seq::drop_while"
        );
        suffix
    }

    /// Elements satisfying `predicate`, in order.
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone,
        P: FnMut(&Self::Elem) -> bool,
    {
        let kept: Self = self
            .cursor()
            .values()
            .filter(|x| predicate(*x))
            .cloned()
            .collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&kept),
            "Seq::filter"
        );
        kept
    }

    /// Elements failing `predicate`, in order.
    fn filter_not<P>(&self, mut predicate: P) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone,
        P: FnMut(&Self::Elem) -> bool,
    {
        self.filter(|x| !predicate(x))
    }

    /// One mapped element per element, collected into any sequence type.
    fn map<B, T, F>(&self, mapper: F) -> T
    where
        T: Seq + FromIterator<B>,
        F: FnMut(&Self::Elem) -> B,
    {
        let mapped: T = self.cursor().values().map(mapper).collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&mapped),
            "Seq::map"
        );
        mapped
    }

    /// The concatenation of `mapper`'s output for every element.
    fn flat_map<B, I, T, F>(&self, mapper: F) -> T
    where
        T: Seq + FromIterator<B>,
        I: IntoIterator<Item = B>,
        F: FnMut(&Self::Elem) -> I,
    {
        let flattened: T = self.cursor().values().flat_map(mapper).collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&flattened),
            "Seq::flat_map"
        );
        flattened
    }

    /// Runs `action` on every element in order and hands back the sequence.
    fn peek<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&Self::Elem),
    {
        self.cursor().for_next(|x| action(x));
        self
    }

    /// First occurrence of every distinct element, in order.
    fn distinct(&self) -> Self
    where
        Self: Sized + FromIterator<Self::Elem>,
        Self::Elem: Clone + Eq + Hash,
    {
        let unique: Self = self.cursor().values().unique().cloned().collect();
        crate::debug_invariants!(
            crate::debug_invariants::DebugInvariants::validate_invariants(&unique),
            "Seq::distinct"
        );
        unique
    }

    // ---------------------------------------------------------------------
    // Equality and hashing
    // ---------------------------------------------------------------------

    /// Same count and pairwise-equal elements in order. Works across
    /// different `Seq` implementations.
    fn seq_eq<S>(&self, other: &S) -> bool
    where
        S: Seq + ?Sized,
        Self::Elem: PartialEq<S::Elem>,
    {
        Foldable::count(self) == Foldable::count(other)
            && itertools::equal(self.cursor().values(), other.cursor().values())
    }

    /// Order-sensitive hash: `h = 31·h + hash(e)` over the elements,
    /// starting from 1. Equal sequences hash equally.
    fn seq_hash(&self) -> u64
    where
        Self::Elem: Hash,
    {
        let mut h = HASH_SEED;
        self.cursor().for_next(|x| {
            let mut hasher = DefaultHasher::new();
            x.hash(&mut hasher);
            h = h.wrapping_mul(HASH_FACTOR).wrapping_add(hasher.finish());
        });
        h
    }

    /// Feed [`seq_hash`](Self::seq_hash) to `state`, for `Hash` impls.
    fn hash_into<H: Hasher>(&self, state: &mut H)
    where
        Self::Elem: Hash,
    {
        state.write_u64(self.seq_hash());
    }
}
