//! FlowError: Unified error type for flowseq public APIs
//!
//! Every fallible operation of the crate reports one of these conditions.
//! Failures raised by caller-supplied closures are not wrapped here: the
//! `try_*` operations are generic over the closure's own error type and hand
//! it back unmodified.

use thiserror::Error;

/// Unified error type for flowseq operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// A malformed argument was rejected before any traversal began.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A value was requested from an empty option.
    #[error("Element absent: the option holds no value")]
    ElementAbsent,
    /// Indexed access outside `[0, count)`.
    #[error("Index {index} out of bounds for sequence of {count} elements")]
    OutOfBounds { index: usize, count: usize },
    /// The element count cannot be narrowed into the container size hint.
    #[error("Size overflow: {count} elements do not fit the container size hint")]
    SizeOverflow { count: usize },
    /// A sequence broke its structural contract.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
