use alloc::collections::TryReserveError;
use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for `DynArray` operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index falls outside the occupied part of the array
    #[error("index {index} out of bounds for array of {length} items")]
    IndexOutOfBounds {
        /// Index as given by the caller
        index: usize,
        /// Number of items currently stored
        length: usize,
    },
    /// Item byte length differs from the array's fixed item size
    #[error("item of {actual} bytes does not match the item size of {expected} bytes")]
    ItemSizeMismatch {
        /// Item size the array was created with
        expected: usize,
        /// Byte length of the item the caller passed
        actual: usize,
    },
    /// An array of zero-size items cannot address its elements
    #[error("item size must be at least 1 byte")]
    ZeroItemSize,
    /// The allocator could not provide the requested buffer
    #[error("buffer growth failed: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
