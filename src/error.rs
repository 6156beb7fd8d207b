//! Errors reported when a caller breaks the contract of a search.
//!
//! A target that is simply absent is never an error; every search reports
//! that as [`None`].

use thiserror::Error;

/// A search could not run to completion because its input was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An explicit sub-range was inverted or reached past the end of the
    /// sequence.
    #[error("range {start}..{end} is out of bounds for a sequence of length {len}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// Length of the searched sequence.
        len: usize,
    },
    /// The doubling search never found a value greater than or equal to the
    /// target before running out of window growths or index space.
    #[error("search window grew {growths} times without bracketing the target")]
    WindowOverflow {
        /// Number of times the window was grown before giving up.
        growths: u32,
    },
}

/// Alias for a [`Result`] with the error type [`SearchError`].
pub type Result<T, E = SearchError> = core::result::Result<T, E>;
