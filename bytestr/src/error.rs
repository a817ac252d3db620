use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for `ByteStr` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// A slicing index falls outside `[-length, length]`
    #[error("index {index} out of bounds for string of {length} bytes (valid range is -{length}..={length})")]
    OutOfBounds {
        /// Index as given by the caller, before normalization
        index: isize,
        /// Length of the string being sliced
        length: usize,
    },
    /// Slicing indices are individually in bounds but start ends up past end
    #[error("invalid range: start {start} is past end {end} after normalization")]
    InvalidRange {
        /// Normalized start offset
        start: usize,
        /// Normalized end offset
        end: usize,
    },
    /// Split delimiter is longer than the string being split
    #[error("delimiter of {delimiter} bytes is longer than the string of {length} bytes")]
    DelimiterTooLong {
        /// Length of the delimiter in bytes
        delimiter: usize,
        /// Length of the string being split
        length: usize,
    },
    /// The string holds a NUL byte and cannot be exported NUL-terminated
    #[error("interior nul byte at offset {position}")]
    InteriorNul {
        /// Offset of the first NUL byte
        position: usize,
    },
}
