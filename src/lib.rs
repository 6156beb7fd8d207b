//! Data Structures & Algorithms: Searching
//!
//! Binary search and its variations over sequences whose sortedness has been
//! weakened or transformed: ascending or descending order, rotated arrays,
//! bitonic ("mountain") arrays, unbounded sources only reachable through an
//! index, and wraparound search over ordered letters.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod error;

pub use error::SearchError;

/// Data Structures & Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::error::SearchError;

    #[doc(no_inline)]
    pub use super::algorithms::source::{Extent, FnSource, IndexedSource, Padded};

    #[doc(no_inline)]
    pub use super::algorithms::binary_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::linear_search::*;
    #[doc(no_inline)]
    pub use super::algorithms::mountain::*;
    #[doc(no_inline)]
    pub use super::algorithms::next_greatest::*;
    #[doc(no_inline)]
    pub use super::algorithms::rotated::*;
    #[doc(no_inline)]
    pub use super::algorithms::search_range::*;
    #[doc(no_inline)]
    pub use super::algorithms::unbounded::*;
}
