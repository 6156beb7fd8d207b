//! Searching a [bitonic] ("mountain") array: strictly increasing up to a single
//! peak, then strictly decreasing.
//!
//! The comparison `arr[mid] > arr[mid + 1]` is `false` on the ascending slope
//! and `true` on the descending one, so the peak is the first index where it
//! flips and can be found by binary search. Each slope is then an ordinary
//! sorted array.
//!
//! [bitonic]: https://en.wikipedia.org/wiki/Bitonic_sorter

use super::binary_search::{search_ordered, Order};

/// Returns the index of the peak (the largest element) of a bitonic array, or
/// [`None`] if the array is empty.
///
/// Strictly increasing arrays peak at their last index, strictly decreasing
/// ones at index `0`.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [0, 1, 2, 3, 5, 9, 2, 1, 0];
///
/// assert_eq!(peak_index(&arr), Some(5));
/// assert_eq!(peak_index::<i32>(&[]), None);
/// ```
pub fn peak_index<T: Ord>(arr: &[T]) -> Option<usize> {
    let mut start = 0;
    let mut end = arr.len().checked_sub(1)?;

    while start < end {
        let mid = start + ((end - start) >> 1);

        if arr[mid] > arr[mid + 1] {
            // Descending slope: `mid` may be the peak itself.
            end = mid;
        } else {
            start = mid + 1;
        }
    }

    Some(start)
}

/// Returns the index of the `target` within a bitonic array, or [`None`] if
/// it was not found.
///
/// The ascending slope is searched first, so when `target` occurs on both
/// slopes the index on the ascending one is returned.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time: one search for the peak, then at most two binary
/// searches.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [1, 3, 5, 7, 6, 4, 2];
///
/// assert_eq!(mountain_search(&arr, &6), Some(4));
/// assert_eq!(mountain_search(&arr, &3), Some(1));
/// assert_eq!(mountain_search(&arr, &8), None);
/// ```
pub fn mountain_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let peak = peak_index(arr)?;

    let (ascending, descending) = arr.split_at(peak + 1);

    search_ordered(ascending, target, Order::Ascending).or_else(|| {
        search_ordered(descending, target, Order::Descending).map(|i| i + peak + 1)
    })
}
