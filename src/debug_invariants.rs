use crate::flow::{Foldable, Traversable};
use crate::flow_error::FlowError;
use crate::seq::Seq;
use crate::traversal::{DuplexIndexed, Indexed, Traverser};

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), FlowError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Structural contract of every sequence:
/// - a forward indexed walk visits positions `0..count()` in order, each
///   element being the one `get` returns for that position;
/// - a backward indexed walk from the end visits the same positions in
///   reverse;
/// - `get(count())` is `None`;
/// - the flow traverser visits the same elements as the forward cursor.
impl<S: Seq + ?Sized> DebugInvariants for S {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Seq");
    }

    fn validate_invariants(&self) -> Result<(), FlowError> {
        let count = Foldable::count(self);
        log::debug!("validating sequence of {count} elements");

        let mut expected = 0usize;
        let mut violation = None;
        self.cursor().while_next_indexed(|control, idx, x| {
            if idx != expected {
                violation = Some(format!(
                    "forward cursor reported position {idx}, expected {expected}"
                ));
                control.exit();
            } else if !self.get(idx).is_some_and(|at| std::ptr::eq(at, x)) {
                violation = Some(format!(
                    "forward cursor and get disagree at position {idx}"
                ));
                control.exit();
            }
            expected += 1;
        });
        if let Some(msg) = violation {
            return Err(FlowError::InvariantViolation(msg));
        }
        if expected != count {
            return Err(FlowError::InvariantViolation(format!(
                "forward cursor visited {expected} elements, count is {count}"
            )));
        }

        let mut remaining = count;
        self.cursor_at_end().while_prev_indexed(|control, idx, _| {
            if remaining == 0 || idx != remaining - 1 {
                violation = Some(format!(
                    "backward cursor reported position {idx} with {remaining} elements left"
                ));
                control.exit();
            } else {
                remaining -= 1;
            }
        });
        if let Some(msg) = violation {
            return Err(FlowError::InvariantViolation(msg));
        }
        if remaining != 0 {
            return Err(FlowError::InvariantViolation(format!(
                "backward cursor stopped with {remaining} of {count} elements unvisited"
            )));
        }

        if self.get(count).is_some() {
            return Err(FlowError::InvariantViolation(format!(
                "get({count}) returned an element past the end"
            )));
        }

        let mut position = 0usize;
        self.traverser().while_next(|control, item| {
            let x = S::as_elem(item);
            if !self.get(position).is_some_and(|at| std::ptr::eq(at, x)) {
                violation = Some(format!(
                    "traverser and cursor disagree at position {position}"
                ));
                control.exit();
            }
            position += 1;
        });
        if let Some(msg) = violation {
            return Err(FlowError::InvariantViolation(msg));
        }
        if position != count {
            return Err(FlowError::InvariantViolation(format!(
                "traverser visited {position} elements, cursor visited {count}"
            )));
        }
        Ok(())
    }
}
