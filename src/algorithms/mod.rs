//! Search algorithms.

pub mod binary_search;
pub mod linear_search;
pub mod mountain;
pub mod next_greatest;
pub mod rotated;
pub mod search_range;
pub mod source;
pub mod unbounded;

#[cfg(test)]
mod comparisons;
