//! Smallest element strictly greater than a target, wrapping around to the
//! start of the array when there is none (the "next greatest letter"
//! problem).

/// Returns the smallest element of the sorted array that is strictly greater
/// than `target`, or the first element if every element is less than or equal
/// to `target`.
///
/// Returns [`None`] only when the array is empty.
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
/// let arr = [10, 20, 20, 30];
///
/// assert_eq!(next_greatest(&arr, &20), Some(&30));
/// assert_eq!(next_greatest(&arr, &5), Some(&10));
/// assert_eq!(next_greatest(&arr, &30), Some(&10));
/// ```
pub fn next_greatest<'a, T: Ord>(arr: &'a [T], target: &T) -> Option<&'a T> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        // Equal elements are skipped too, the answer must be strictly greater.
        if arr[mid] <= *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    // `lo == arr.len()` wraps around to the first element.
    arr.get(lo.checked_rem(arr.len())?)
}

/// Returns the smallest letter of the sorted `letters` that is strictly
/// greater than `target`, wrapping around to the first letter.
///
/// Returns [`None`] only when `letters` is empty.
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
/// let letters = ['c', 'f', 'j'];
///
/// assert_eq!(next_greatest_letter(&letters, 'a'), Some('c'));
/// assert_eq!(next_greatest_letter(&letters, 'c'), Some('f'));
/// assert_eq!(next_greatest_letter(&letters, 'k'), Some('c'));
/// ```
pub fn next_greatest_letter(letters: &[char], target: char) -> Option<char> {
    next_greatest(letters, &target).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::comparisons::{bits, counted, Counted};

    use core::cell::Cell;

    use proptest::prelude::*;

    #[test]
    fn test_before_first() {
        assert_eq!(next_greatest_letter(&['c', 'f', 'j'], 'a'), Some('c'));
    }

    #[test]
    fn test_wraps_around() {
        assert_eq!(next_greatest_letter(&['c', 'f', 'j'], 'k'), Some('c'));
        assert_eq!(next_greatest_letter(&['c', 'f', 'j'], 'j'), Some('c'));
    }

    #[test]
    fn test_skips_equal_letters() {
        assert_eq!(next_greatest_letter(&['c', 'f', 'j'], 'c'), Some('f'));
        assert_eq!(next_greatest_letter(&['x', 'x', 'x', 'y'], 'x'), Some('y'));
        assert_eq!(next_greatest_letter(&['a', 'b', 'f', 'g'], 'e'), Some('f'));
    }

    #[test]
    fn test_all_equal() {
        assert_eq!(next_greatest_letter(&['e', 'e', 'e'], 'e'), Some('e'));
        assert_eq!(next_greatest_letter(&['e', 'e', 'e'], 'd'), Some('e'));
    }

    #[test]
    fn test_empty() {
        assert_eq!(next_greatest_letter(&[], 'a'), None);
        assert_eq!(next_greatest::<i32>(&[], &1), None);
    }

    #[test]
    fn test_comparisons_are_logarithmic() {
        let comparisons = Cell::new(0);
        let arr = counted(&[3; 1_024], &comparisons);

        for target in [2, 3, 4] {
            comparisons.set(0);
            assert!(next_greatest(&arr, &Counted::new(target, &comparisons)).is_some());
            assert!(comparisons.get() <= bits(arr.len()) + 1, "{} comparisons", comparisons.get());
        }
    }

    proptest! {
        #[test]
        fn matches_linear_scan(mut letters in proptest::collection::vec(proptest::char::range('a', 'z'), 1..30), target in proptest::char::range('a', 'z')) {
            letters.sort_unstable();
            let expected = letters.iter().find(|&&c| c > target).unwrap_or(&letters[0]);
            prop_assert_eq!(next_greatest_letter(&letters, target), Some(*expected));
        }
    }
}
