//! Searching a sorted array that has been [rotated] by an unknown offset.
//!
//! An ascending array rotated by `k` positions, e.g. `[4, 5, 6, 7, 0, 1, 2, 3]`,
//! has at most one *pivot*: the index `i` where `arr[i] > arr[i + 1]`. Everything
//! up to and including the pivot is greater than or equal to everything after
//! it, so once the pivot is known each side is an ordinary sorted array.
//!
//! [rotated]: https://en.wikipedia.org/wiki/Circular_shift

use tracing::trace;

use super::binary_search::binary_search;

/// Returns the index of the rotation pivot (the largest element, which is
/// immediately followed by the smallest one), or [`None`] if the array is not
/// rotated.
///
/// The array must not contain duplicates. With duplicates the comparison used
/// to pick a half can be ambiguous; use [`find_pivot_with_duplicates`]
/// instead.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. At every step one of the two halves around `mid`
/// is sorted, and the pivot lies in the other one.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// assert_eq!(find_pivot(&[4, 5, 6, 7, 0, 1, 2, 3]), Some(3));
/// assert_eq!(find_pivot(&[0, 1, 2, 3, 4, 5, 6, 7]), None);
/// ```
pub fn find_pivot<T: Ord>(arr: &[T]) -> Option<usize> {
    // The pivot and its successor are always both inside `start..=end`.
    let mut start = 0;
    let mut end = arr.len().checked_sub(1)?;

    while start < end {
        let mid = start + ((end - start) >> 1);

        if arr[mid] > arr[mid + 1] {
            return Some(mid);
        }
        if mid > start && arr[mid] < arr[mid - 1] {
            return Some(mid - 1);
        }

        if arr[mid] <= arr[start] {
            if mid == start {
                break;
            }
            end = mid - 1;
        } else {
            start = mid + 1;
        }
    }

    None
}

/// Returns the index of the rotation pivot of an array that may contain
/// duplicates, or [`None`] if the array is not rotated.
///
/// When the elements at `start`, `mid` and `end` are all equal there is no
/// way to tell which half holds the pivot, so the window shrinks by one from
/// each side instead, after checking that neither skipped element is itself
/// the pivot.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time when duplicates are rare, degrading to *O*(*n*) in
/// the worst case, e.g. `[1, 1, 1, 1, 0, 1, 1]`, where most steps can only
/// discard the two boundary elements.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [4, 4, 5, 5, 5, 6, 7, 7, 7, 0, 1, 2, 3];
///
/// assert_eq!(find_pivot_with_duplicates(&arr), Some(8));
/// assert_eq!(find_pivot_with_duplicates(&[2, 2, 2, 0, 2]), Some(2));
/// assert_eq!(find_pivot_with_duplicates(&[3, 3, 3]), None);
/// ```
pub fn find_pivot_with_duplicates<T: Ord>(arr: &[T]) -> Option<usize> {
    let mut start = 0;
    let mut end = arr.len().checked_sub(1)?;

    while start < end {
        let mid = start + ((end - start) >> 1);

        if arr[mid] > arr[mid + 1] {
            return Some(mid);
        }
        if mid > start && arr[mid] < arr[mid - 1] {
            return Some(mid - 1);
        }

        if arr[start] == arr[mid] && arr[mid] == arr[end] {
            // Skipping a boundary element is only safe once it is known not to
            // be the pivot.
            if arr[start] > arr[start + 1] {
                return Some(start);
            }
            start += 1;

            if end > start && arr[end] < arr[end - 1] {
                return Some(end - 1);
            }
            end -= 1;

            trace!(start, end, "skipped duplicate boundaries");
        } else if arr[start] < arr[mid] || (arr[start] == arr[mid] && arr[mid] > arr[end]) {
            // Left half is sorted, so the pivot is on the right.
            start = mid + 1;
        } else {
            if mid == start {
                break;
            }
            end = mid - 1;
        }
    }

    None
}

/// Returns how many times an ascending array without duplicates has been
/// rotated to the right.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, see [`find_pivot`].
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// assert_eq!(rotation_count(&[4, 5, 6, 7, 0, 1, 2, 3]), 4);
/// assert_eq!(rotation_count(&[0, 1, 2, 3, 4, 5, 6, 7]), 0);
/// ```
pub fn rotation_count<T: Ord>(arr: &[T]) -> usize {
    find_pivot(arr).map_or(0, |pivot| pivot + 1)
}

/// Returns how many times an ascending array, possibly containing duplicates,
/// has been rotated to the right.
///
/// # Time Complexity
///
/// *O*(*n*) in the worst case, see [`find_pivot_with_duplicates`].
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [4, 4, 5, 5, 5, 6, 7, 7, 7, 0, 1, 2, 3];
///
/// assert_eq!(rotation_count_with_duplicates(&arr), 9);
/// ```
pub fn rotation_count_with_duplicates<T: Ord>(arr: &[T]) -> usize {
    find_pivot_with_duplicates(arr).map_or(0, |pivot| pivot + 1)
}

/// Returns the index of the `target` within a rotated ascending array without
/// duplicates, or [`None`] if it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time: one search for the pivot, then one binary search
/// on the side that can hold `target`.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [4, 5, 6, 7, 0, 1, 2, 3];
///
/// assert_eq!(search_rotated(&arr, &6), Some(2));
/// assert_eq!(search_rotated(&arr, &1), Some(5));
/// assert_eq!(search_rotated(&arr, &8), None);
/// ```
pub fn search_rotated<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_around_pivot(arr, target, find_pivot(arr))
}

/// Returns the index of an element equal to `target` within a rotated
/// ascending array that may contain duplicates, or [`None`] if it was not
/// found.
///
/// # Time Complexity
///
/// *O*(*n*) in the worst case, see [`find_pivot_with_duplicates`].
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [4, 4, 5, 5, 5, 6, 7, 7, 7, 0, 1, 2, 3];
///
/// assert_eq!(search_rotated_with_duplicates(&arr, &1), Some(10));
/// assert_eq!(search_rotated_with_duplicates(&arr, &8), None);
/// ```
pub fn search_rotated_with_duplicates<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_around_pivot(arr, target, find_pivot_with_duplicates(arr))
}

fn search_around_pivot<T: Ord>(arr: &[T], target: &T, pivot: Option<usize>) -> Option<usize> {
    let Some(pivot) = pivot else {
        return binary_search(arr, target);
    };

    // Everything in `0..=pivot` is >= `arr[0]`, everything after it is <= `arr[0]`.
    if *target >= arr[0] {
        trace!(pivot, "searching left of pivot");
        binary_search(&arr[..=pivot], target)
    } else {
        trace!(pivot, "searching right of pivot");
        binary_search(&arr[pivot + 1..], target).map(|i| i + pivot + 1)
    }
}
