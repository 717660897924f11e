//! Error types for range tree operations.

use thiserror::Error;

/// Error variants for range tree operations.
///
/// Every operation validates its arguments before touching the tree, so a
/// call that returns an error leaves the structure exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was malformed: a `build` input of the wrong length, or a
    /// range whose start lies after its end.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index fell outside the structure's bounds.
    #[error("index out of range: {index} (len {len})")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The number of elements in the structure.
        len: usize,
    },
}

/// A specialized Result type for range tree operations.
pub type Result<T> = std::result::Result<T, Error>;
