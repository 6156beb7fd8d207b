//! [Linear Search]: Method for finding an element within a list. It
//! sequentially checks each element of the list until a match is found or the
//! whole list has been searched.
//!
//! Every search in this crate has a brute-force counterpart here. They make
//! no assumption about ordering, which makes them useful as reference
//! implementations when checking the logarithmic versions.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

/// Returns the index of the first occurrence of `target` within the array, or
/// [`None`] if it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Linear search sequentially checks each element of the
/// list until a match is found or the whole list has been searched.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [11, 4, 30, 110, 20, 2, 70, 45];
///
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|elem| elem == target)
}

/// Returns the inclusive range of positions holding `target`, or [`None`] if
/// it does not occur.
///
/// Occurrences are assumed to be contiguous, as they are in a sorted array.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [5, 7, 7, 8, 8, 10];
///
/// assert_eq!(linear_range(&arr, &8), Some((3, 4)));
/// assert_eq!(linear_range(&arr, &6), None);
/// ```
pub fn linear_range<T: PartialEq>(arr: &[T], target: &T) -> Option<(usize, usize)> {
    let first = arr.iter().position(|elem| elem == target)?;
    let last = arr.iter().rposition(|elem| elem == target)?;

    Some((first, last))
}

/// Returns the first index `i` where `arr[i] > arr[i + 1]`, or [`None`] if the
/// array never decreases.
///
/// For a rotated ascending array this is the rotation pivot.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// assert_eq!(linear_pivot(&[4, 5, 6, 7, 0, 1, 2]), Some(3));
/// assert_eq!(linear_pivot(&[0, 1, 2]), None);
/// ```
pub fn linear_pivot<T: Ord>(arr: &[T]) -> Option<usize> {
    arr.windows(2).position(|pair| pair[0] > pair[1])
}

/// Returns the index of the first maximum element, or [`None`] if the array
/// is empty.
///
/// For a bitonic array this is the peak.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// assert_eq!(linear_peak(&[0, 1, 2, 3, 5, 9, 2, 1, 0]), Some(5));
/// assert_eq!(linear_peak::<i32>(&[]), None);
/// ```
pub fn linear_peak<T: Ord>(arr: &[T]) -> Option<usize> {
    let mut peak = 0;

    for (i, elem) in arr.iter().enumerate().skip(1) {
        if *elem > arr[peak] {
            peak = i;
        }
    }

    (!arr.is_empty()).then_some(peak)
}
