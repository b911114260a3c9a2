#![allow(dead_code)]
use std::cell::RefCell;
use std::hash::{Hash, Hasher};

use flowseq::flow::{Foldable, Queryable, Traversable};
use flowseq::seq::Seq;
use flowseq::traversal::SliceTraverser;

/// Minimal `Vec`-backed sequence used to exercise the `Seq` defaults.
#[derive(Debug, Clone, Default)]
pub struct VecSeq<A>(pub Vec<A>);

pub fn seq<A: Clone>(items: &[A]) -> VecSeq<A> {
    VecSeq(items.to_vec())
}

impl<A> Traversable for VecSeq<A> {
    type Item<'a>
        = &'a A
    where
        Self: 'a;

    type Traverser<'a>
        = SliceTraverser<'a, A>
    where
        Self: 'a;

    fn traverser(&self) -> SliceTraverser<'_, A> {
        SliceTraverser::new(&self.0)
    }
}

impl<A> Queryable for VecSeq<A> {}

impl<A> Foldable for VecSeq<A> {
    fn count(&self) -> usize {
        self.0.len()
    }
}

impl<A> Seq for VecSeq<A> {
    type Elem = A;

    type Cursor<'a>
        = SliceTraverser<'a, A>
    where
        Self: 'a;

    fn cursor(&self) -> SliceTraverser<'_, A> {
        SliceTraverser::new(&self.0)
    }

    fn cursor_at_end(&self) -> SliceTraverser<'_, A> {
        SliceTraverser::at_end(&self.0)
    }

    fn get(&self, idx: usize) -> Option<&A> {
        self.0.get(idx)
    }

    fn as_elem<'a>(item: &'a A) -> &'a A
    where
        Self: 'a,
    {
        item
    }
}

impl<A> FromIterator<A> for VecSeq<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        VecSeq(iter.into_iter().collect())
    }
}

impl<A: PartialEq> PartialEq for VecSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.seq_eq(other)
    }
}

impl<A: Eq> Eq for VecSeq<A> {}

impl<A: Hash> Hash for VecSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_into(state);
    }
}

/// Predicate wrapper that records every value it was asked about.
#[derive(Debug)]
pub struct Recorder<T> {
    seen: RefCell<Vec<T>>,
}

impl<T: Clone> Recorder<T> {
    pub fn new() -> Self {
        Recorder {
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Wrap `predicate` so each call is logged before it is answered.
    pub fn wrap<'r>(&'r self, predicate: impl Fn(&T) -> bool + 'r) -> impl FnMut(&T) -> bool + 'r {
        move |x: &T| {
            self.seen.borrow_mut().push(x.clone());
            predicate(x)
        }
    }

    pub fn seen(&self) -> Vec<T> {
        self.seen.borrow().clone()
    }

    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }
}
