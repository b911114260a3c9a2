//! The push-style cursor protocol.
//!
//! A [`Traverser`] pushes at most one element per [`Traverser::try_next`]
//! call into a consumer and reports whether it had one to push. Everything
//! else (unconditional drives, controlled drives with early exit, fallible
//! drives, pull adapters) is derived from that single primitive, so a source
//! only has to implement `try_next` to get the whole protocol.
//!
//! Refinements add backward movement ([`Duplex`]), element positions
//! ([`Indexed`]) or both ([`DuplexIndexed`]).

use super::control::{Control, Drive};

/// Single-pass, stateful cursor over a source.
///
/// Each call to a source's `traverser()` yields a fresh cursor. Once a drive
/// has exhausted it or exited early the cursor is discarded by the flow
/// operations; driving it again resumes from the current position.
pub trait Traverser {
    type Item;

    /// Push the next element into `action`, if one remains.
    ///
    /// Returns `true` iff an element was pushed.
    fn try_next(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool;

    /// Pull form of [`try_next`](Self::try_next).
    fn next_value(&mut self) -> Option<Self::Item> {
        let mut slot = None;
        self.try_next(&mut |x| slot = Some(x));
        slot
    }

    /// Drive to exhaustion, visiting every remaining element in order.
    fn for_next<F>(&mut self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while self.try_next(&mut action) {}
    }

    /// Drive until exhaustion or until the consumer calls [`Control::exit`].
    ///
    /// The element on which `exit` was called is the last one visited.
    fn while_next<F>(&mut self, action: F) -> Drive
    where
        Self: Sized,
        F: FnMut(&mut Control, Self::Item),
    {
        drive_while::<Self::Item, _, _>(|step| self.try_next(step), action)
    }

    /// Fallible [`for_next`](Self::for_next): the first error stops the drive
    /// and is returned as is.
    fn try_for_next<E, F>(&mut self, mut action: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        try_drive_while::<Self::Item, E, _, _>(|step| self.try_next(step), |_, x| action(x))
            .map(|_| ())
    }

    /// Fallible [`while_next`](Self::while_next).
    fn try_while_next<E, F>(&mut self, action: F) -> Result<Drive, E>
    where
        Self: Sized,
        F: FnMut(&mut Control, Self::Item) -> Result<(), E>,
    {
        try_drive_while::<Self::Item, E, _, _>(|step| self.try_next(step), action)
    }

    /// Adapt the remaining elements into a standard [`Iterator`].
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values { inner: self }
    }
}

/// Cursor that also reports each element's position.
pub trait Indexed: Traverser {
    fn try_next_indexed(&mut self, action: &mut dyn FnMut(usize, Self::Item)) -> bool;

    fn for_next_indexed<F>(&mut self, mut action: F)
    where
        Self: Sized,
        F: FnMut(usize, Self::Item),
    {
        while self.try_next_indexed(&mut action) {}
    }

    fn while_next_indexed<F>(&mut self, action: F) -> Drive
    where
        Self: Sized,
        F: FnMut(&mut Control, usize, Self::Item),
    {
        drive_while_indexed::<Self::Item, _, _>(|step| self.try_next_indexed(step), action)
    }
}

/// Cursor that can also move backward.
///
/// `try_prev` yields the element just before the current position, so a
/// cursor positioned at the end of its source walks it in reverse.
pub trait Duplex: Traverser {
    fn try_prev(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool;

    fn prev_value(&mut self) -> Option<Self::Item> {
        let mut slot = None;
        self.try_prev(&mut |x| slot = Some(x));
        slot
    }

    fn for_prev<F>(&mut self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while self.try_prev(&mut action) {}
    }

    fn while_prev<F>(&mut self, action: F) -> Drive
    where
        Self: Sized,
        F: FnMut(&mut Control, Self::Item),
    {
        drive_while::<Self::Item, _, _>(|step| self.try_prev(step), action)
    }
}

/// Bidirectional cursor with positions; the shape of a sequence cursor.
pub trait DuplexIndexed: Duplex + Indexed {
    fn try_prev_indexed(&mut self, action: &mut dyn FnMut(usize, Self::Item)) -> bool;

    fn for_prev_indexed<F>(&mut self, mut action: F)
    where
        Self: Sized,
        F: FnMut(usize, Self::Item),
    {
        while self.try_prev_indexed(&mut action) {}
    }

    fn while_prev_indexed<F>(&mut self, action: F) -> Drive
    where
        Self: Sized,
        F: FnMut(&mut Control, usize, Self::Item),
    {
        drive_while_indexed::<Self::Item, _, _>(|step| self.try_prev_indexed(step), action)
    }
}

impl<T: Traverser + ?Sized> Traverser for Box<T> {
    type Item = T::Item;

    #[inline]
    fn try_next(&mut self, action: &mut dyn FnMut(T::Item)) -> bool {
        (**self).try_next(action)
    }
}

impl<T: Traverser + ?Sized> Traverser for &mut T {
    type Item = T::Item;

    #[inline]
    fn try_next(&mut self, action: &mut dyn FnMut(T::Item)) -> bool {
        (**self).try_next(action)
    }
}

/// Iterator over the remaining elements of a traverser.
#[derive(Debug)]
pub struct Values<T> {
    inner: T,
}

impl<T: Traverser> Iterator for Values<T> {
    type Item = T::Item;

    #[inline]
    fn next(&mut self) -> Option<T::Item> {
        self.inner.next_value()
    }
}

// --- drive loops shared by every direction ---

fn drive_while<A, S, F>(mut step: S, mut action: F) -> Drive
where
    S: FnMut(&mut dyn FnMut(A)) -> bool,
    F: FnMut(&mut Control, A),
{
    let mut control = Control::default();
    let outcome = loop {
        let advanced = step(&mut |x| action(&mut control, x));
        if !advanced {
            break Drive::Completed;
        }
        if control.is_exited() {
            break Drive::Exited;
        }
    };
    log::trace!("traversal drive finished: {outcome:?}");
    outcome
}

fn drive_while_indexed<A, S, F>(mut step: S, mut action: F) -> Drive
where
    S: FnMut(&mut dyn FnMut(usize, A)) -> bool,
    F: FnMut(&mut Control, usize, A),
{
    let mut control = Control::default();
    let outcome = loop {
        let advanced = step(&mut |idx, x| action(&mut control, idx, x));
        if !advanced {
            break Drive::Completed;
        }
        if control.is_exited() {
            break Drive::Exited;
        }
    };
    log::trace!("indexed traversal drive finished: {outcome:?}");
    outcome
}

fn try_drive_while<A, E, S, F>(mut step: S, mut action: F) -> Result<Drive, E>
where
    S: FnMut(&mut dyn FnMut(A)) -> bool,
    F: FnMut(&mut Control, A) -> Result<(), E>,
{
    let mut control = Control::default();
    let mut failure: Option<E> = None;
    let outcome = loop {
        let advanced = step(&mut |x| {
            if let Err(err) = action(&mut control, x) {
                failure = Some(err);
            }
        });
        if let Some(err) = failure.take() {
            return Err(err);
        }
        if !advanced {
            break Drive::Completed;
        }
        if control.is_exited() {
            break Drive::Exited;
        }
    };
    log::trace!("fallible traversal drive finished: {outcome:?}");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal forward cursor over a counter, independent of the sources module.
    struct Countdown(u32);

    impl Traverser for Countdown {
        type Item = u32;

        fn try_next(&mut self, action: &mut dyn FnMut(u32)) -> bool {
            if self.0 == 0 {
                return false;
            }
            action(self.0);
            self.0 -= 1;
            true
        }
    }

    #[test]
    fn for_next_visits_everything_in_order() {
        let mut seen = Vec::new();
        Countdown(3).for_next(|x| seen.push(x));
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn while_next_stops_after_exit_element() {
        let mut seen = Vec::new();
        let outcome = Countdown(5).while_next(|control, x| {
            seen.push(x);
            if x == 3 {
                control.exit();
            }
        });
        assert_eq!(outcome, Drive::Exited);
        assert_eq!(seen, vec![5, 4, 3]);
    }

    #[test]
    fn exit_on_last_element_reports_exited() {
        let outcome = Countdown(2).while_next(|control, x| {
            if x == 1 {
                control.exit();
            }
        });
        assert_eq!(outcome, Drive::Exited);
    }

    #[test]
    fn empty_drive_completes_without_calls() {
        let mut calls = 0;
        let outcome = Countdown(0).while_next(|_, _| calls += 1);
        assert_eq!(outcome, Drive::Completed);
        assert_eq!(calls, 0);
    }

    #[test]
    fn fallible_drive_returns_first_error_unmodified() {
        let mut seen = Vec::new();
        let res = Countdown(5).try_for_next(|x| {
            seen.push(x);
            if x == 4 { Err(format!("bad {x}")) } else { Ok(()) }
        });
        assert_eq!(res, Err("bad 4".to_string()));
        assert_eq!(seen, vec![5, 4]);
    }

    #[test]
    fn fallible_controlled_drive_distinguishes_outcomes() {
        let res: Result<Drive, ()> = Countdown(3).try_while_next(|control, x| {
            if x == 2 {
                control.exit();
            }
            Ok(())
        });
        assert_eq!(res, Ok(Drive::Exited));
        let res: Result<Drive, ()> = Countdown(3).try_while_next(|_, _| Ok(()));
        assert_eq!(res, Ok(Drive::Completed));
    }

    #[test]
    fn boxed_and_borrowed_cursors_drive_alike() {
        let mut boxed: Box<dyn Traverser<Item = u32>> = Box::new(Countdown(2));
        assert_eq!(boxed.next_value(), Some(2));
        assert_eq!(boxed.values().collect::<Vec<_>>(), vec![1]);

        let mut inner = Countdown(3);
        assert_eq!((&mut inner).values().next(), Some(3));
        assert_eq!(inner.values().collect::<Vec<_>>(), vec![2, 1]);
    }
}
