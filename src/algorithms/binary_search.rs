//! [Binary Search]: A search algorithm that finds the position of a target
//! value within a sorted array.
//!
//! Besides the usual ascending search, this module handles arrays sorted in
//! descending order and arrays whose direction is not known ahead of time
//! (order-agnostic search).
//!
//! [Binary Search]: https://en.wikipedia.org/wiki/Binary_search

use core::cmp::Ordering;
use core::ops::Range;

use crate::error::{Result, SearchError};

/// Direction in which a monotonic sequence is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Each element is less than or equal to the next one.
    Ascending,
    /// Each element is greater than or equal to the next one.
    Descending,
}

impl Order {
    /// Detects the direction of a monotonic array by comparing its first and
    /// last elements.
    ///
    /// Arrays whose endpoints are equal (including empty and single-element
    /// arrays) hold a single repeated value, so either direction describes
    /// them; [`Order::Ascending`] is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_search::prelude::*;
    ///
    /// assert_eq!(Order::detect(&[1, 4, 9]), Order::Ascending);
    /// assert_eq!(Order::detect(&[9, 4, 1]), Order::Descending);
    /// ```
    pub fn detect<T: Ord>(arr: &[T]) -> Self {
        match (arr.first(), arr.last()) {
            (Some(first), Some(last)) if first > last => Order::Descending,
            _ => Order::Ascending,
        }
    }

    /// Whether the search should continue to the right of an element that
    /// compares to the target as `elem.cmp(target)`.
    #[inline]
    fn goes_right(self, elem_vs_target: Ordering) -> bool {
        match self {
            Order::Ascending => elem_vs_target == Ordering::Less,
            Order::Descending => elem_vs_target == Ordering::Greater,
        }
    }
}

/// Returns the index of the `target` within the sorted array, or [`None`] if
/// it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Binary search uses a divide-and-conquer approach
/// and runs in logarithmic time in the worst case, making *O*(*log n*)
/// comparisons, where `n` is the number of elements in the array.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(binary_search(&arr, &4), Some(0));
/// assert_eq!(binary_search(&arr, &40), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_ordered(arr, target, Order::Ascending)
}

/// Returns the index of the `target` within an array sorted in descending
/// order, or [`None`] if it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, exactly like [`binary_search`] with the
/// comparison branches inverted.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [100, 55, 49, 33, 29, 20, 19, 17];
///
/// assert_eq!(binary_search_desc(&arr, &19), Some(6));
/// assert_eq!(binary_search_desc(&arr, &18), None);
/// ```
pub fn binary_search_desc<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_ordered(arr, target, Order::Descending)
}

/// Returns the index of the `target` within a monotonic array whose direction
/// is not known in advance, or [`None`] if it was not found.
///
/// The direction is detected with [`Order::detect`] before searching.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Detecting the direction costs a single extra
/// comparison.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let asc = [2, 4, 9, 10, 12, 14, 18, 19];
/// let desc = [100, 55, 49, 33, 29, 20, 19, 17, 16, 15, 13, 11, 9, 8, 7, 3, 1, 0];
///
/// assert_eq!(order_agnostic_search(&asc, &19), Some(7));
/// assert_eq!(order_agnostic_search(&desc, &19), Some(6));
/// assert_eq!(order_agnostic_search(&desc, &2), None);
/// ```
pub fn order_agnostic_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_ordered(arr, target, Order::detect(arr))
}

/// Searches the ascending sub-range `range` of `arr` for `target`.
///
/// The returned index is relative to the whole of `arr`, not to the start of
/// `range`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRange`] if `range` is inverted or reaches
/// past the end of `arr`.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [9, 1, 3, 5, 7, 0];
///
/// assert_eq!(binary_search_in(&arr, &5, 1..5), Ok(Some(3)));
/// assert_eq!(binary_search_in(&arr, &9, 1..5), Ok(None));
/// assert!(binary_search_in(&arr, &5, 4..9).is_err());
/// ```
pub fn binary_search_in<T: Ord>(
    arr: &[T],
    target: &T,
    range: Range<usize>,
) -> Result<Option<usize>> {
    let offset = range.start;
    let window = checked_window(arr, range)?;

    Ok(search_ordered(window, target, Order::Ascending).map(|i| i + offset))
}

/// Order-agnostic search restricted to the sub-range `range` of `arr`.
///
/// The direction is detected from the endpoints of `range`, so the rest of
/// `arr` does not need to be monotonic. The returned index is relative to the
/// whole of `arr`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRange`] if `range` is inverted or reaches
/// past the end of `arr`.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [1, 3, 5, 7, 6, 4, 2];
///
/// assert_eq!(order_agnostic_search_in(&arr, &4, 4..7), Ok(Some(5)));
/// assert_eq!(order_agnostic_search_in(&arr, &4, 0..4), Ok(None));
/// ```
pub fn order_agnostic_search_in<T: Ord>(
    arr: &[T],
    target: &T,
    range: Range<usize>,
) -> Result<Option<usize>> {
    let offset = range.start;
    let window = checked_window(arr, range)?;

    Ok(search_ordered(window, target, Order::detect(window)).map(|i| i + offset))
}

/// Borrows `arr[range]`, reporting a malformed range instead of panicking.
pub(crate) fn checked_window<T>(arr: &[T], range: Range<usize>) -> Result<&[T]> {
    let (start, end) = (range.start, range.end);

    arr.get(range).ok_or(SearchError::InvalidRange {
        start,
        end,
        len: arr.len(),
    })
}

/// Binary search over `arr`, which must be monotonic in the given `order`.
pub(crate) fn search_ordered<T: Ord>(arr: &[T], target: &T, order: Order) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            ord if order.goes_right(ord) => lo = mid + 1,
            _ => hi = mid,
        }
    }

    None
}
