//! The error type shared by every container in this crate.
//!
//! Reading or writing out of bounds with `get`/`set` is *not* an error (a read yields `0` and a
//! write does nothing). Errors are reserved for operations whose precondition does not hold, for
//! example popping from an empty container. A container that returns an error is left untouched.

/// A violated precondition of a container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element but the container is empty.
    #[error("the container is empty")]
    Empty,
    /// The position passed to an insertion or removal is past the end of the container.
    #[error("index {index} is out of bounds for a container of size {size}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The size of the container at the time of the call.
        size: usize,
    },
    /// The inclusive range `start..=end` is reversed or reaches past the end of the container.
    #[error("range {start}..={end} is invalid for a container of size {size}")]
    InvalidRange {
        /// First index of the range.
        start: usize,
        /// Last index of the range (inclusive).
        end: usize,
        /// The size of the container at the time of the call.
        size: usize,
    },
    /// A heap operation was called on an array that isn't a max-heap.
    #[error("the array does not satisfy the max-heap property")]
    NotAHeap,
    /// A merge was called with an input that isn't sorted in ascending order.
    #[error("merge input is not sorted")]
    NotSorted,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
