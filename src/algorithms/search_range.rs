//! First and last occurrence of a value in a sorted array that may contain
//! duplicates.
//!
//! Both boundaries are found by a binary search that keeps narrowing after a
//! match instead of returning at the first one, see [Binary Search: duplicate
//! elements].
//!
//! [Binary Search: duplicate elements]: https://en.wikipedia.org/wiki/Binary_search#Duplicate_elements

use core::cmp::Ordering;

/// Which end of a run of equal elements a search should settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    First,
    Last,
}

/// Returns the index of the first occurrence of `target` within the sorted
/// array, or [`None`] if it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, even when every element equals `target`.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [2, 4, 9, 9, 9, 9, 10];
///
/// assert_eq!(first_occurrence(&arr, &9), Some(2));
/// assert_eq!(first_occurrence(&arr, &5), None);
/// ```
pub fn first_occurrence<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_bound(arr, target, Bound::First)
}

/// Returns the index of the last occurrence of `target` within the sorted
/// array, or [`None`] if it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, even when every element equals `target`.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [2, 4, 9, 9, 9, 9, 10];
///
/// assert_eq!(last_occurrence(&arr, &9), Some(5));
/// assert_eq!(last_occurrence(&arr, &11), None);
/// ```
pub fn last_occurrence<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_bound(arr, target, Bound::Last)
}

/// Returns the inclusive `(first, last)` range of positions equal to `target`
/// within the sorted array, or [`None`] if it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time: two independent binary searches, one for each
/// end of the range.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [2, 4, 9, 9, 9, 9, 10, 12, 14, 18, 18, 18, 19, 19, 19];
///
/// assert_eq!(search_range(&arr, &19), Some((12, 14)));
/// assert_eq!(search_range(&arr, &5), None);
/// ```
pub fn search_range<T: Ord>(arr: &[T], target: &T) -> Option<(usize, usize)> {
    let first = first_occurrence(arr, target)?;
    let last = last_occurrence(arr, target)?;

    Some((first, last))
}

/// Returns how many elements of the sorted array are equal to `target`.
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
/// let arr = [1, 1, 2, 2, 2, 3];
///
/// assert_eq!(count_occurrences(&arr, &2), 3);
/// assert_eq!(count_occurrences(&arr, &4), 0);
/// ```
pub fn count_occurrences<T: Ord>(arr: &[T], target: &T) -> usize {
    search_range(arr, target).map_or(0, |(first, last)| last - first + 1)
}

fn search_bound<T: Ord>(arr: &[T], target: &T, bound: Bound) -> Option<usize> {
    let mut candidate = None;
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => {
                // Potential answer, keep looking towards the requested end.
                candidate = Some(mid);

                match bound {
                    Bound::First => hi = mid,
                    Bound::Last => lo = mid + 1,
                }
            }
        }
    }

    candidate
}
