//! [Exponential Search]: Searching a sorted sequence of unknown, possibly
//! infinite, length.
//!
//! The search first finds a window that brackets the target, starting with
//! `[0, 1]` and at least doubling the window's size every time its last
//! element is still smaller than the target. An ordinary binary search then
//! runs inside the window.
//!
//! The source is only ever read through [`IndexedSource::get`]. A read that
//! returns [`None`] counts as "infinity", so finite sources need no sentinel.
//! Sources that are truly unbounded must eventually produce a value greater
//! than or equal to the target; when they do not, the search gives up with
//! [`SearchError::WindowOverflow`] instead of looping forever.
//!
//! [Exponential Search]: https://en.wikipedia.org/wiki/Exponential_search

use core::cmp::Ordering;

use tracing::{debug, trace, warn};

use super::source::{Extent, IndexedSource};
use crate::error::{Result, SearchError};

/// Doubling search over an [`IndexedSource`], with a bound on how many times
/// the search window may grow.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let squares = FnSource::new(|i: usize| i.checked_mul(i));
/// let search = DoublingSearch::new().max_growths(16);
///
/// assert_eq!(search.search(squares, 1_369), Ok(Some(37)));
/// assert_eq!(search.search(squares, 1_370), Ok(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoublingSearch {
    max_growths: u32,
}

impl Default for DoublingSearch {
    /// Allows as many growths as there are bits in a `usize`, which is more
    /// than enough to reach the end of the index space.
    fn default() -> Self {
        Self {
            max_growths: usize::BITS,
        }
    }
}

impl DoublingSearch {
    /// Creates a search with the default growth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many times the window may grow before the search gives up.
    #[must_use]
    pub const fn max_growths(mut self, max_growths: u32) -> Self {
        self.max_growths = max_growths;
        self
    }

    /// Returns the index of the `target` within the ascending `source`, or
    /// [`None`] if it was not found.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*log i*) time, where `i` is the index of the target (or of
    /// the first larger value): *O*(*log i*) probes to bracket it, then a
    /// binary search over a window of size *O*(*i*).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::WindowOverflow`] if every probed value stays
    /// below `target` until the growth limit is reached or the window would
    /// leave the `usize` index space.
    pub fn search<S: IndexedSource>(&self, source: S, target: S::Item) -> Result<Option<usize>> {
        let last = match source.extent() {
            Extent::Bounded(0) => return Ok(None),
            Extent::Bounded(len) => Some(len - 1),
            Extent::Unbounded => None,
        };
        let clamp = |index: usize| last.map_or(index, |last| index.min(last));

        let mut start = 0;
        let mut end = clamp(1);
        let mut growths = 0;

        while below(&source, end, &target) {
            if Some(end) == last {
                return Ok(None);
            }
            if growths == self.max_growths {
                warn!(growths, end, "search window growth limit reached");
                return Err(SearchError::WindowOverflow { growths });
            }

            // new end = end + size * 2, kept strictly below `usize::MAX` so
            // the window stays representable as a half-open range.
            let size = end - start + 1;
            let new_end = size
                .checked_mul(2)
                .and_then(|grow| end.checked_add(grow))
                .filter(|&new_end| new_end < usize::MAX)
                .ok_or_else(|| {
                    warn!(growths, end, "search window left the index space");
                    SearchError::WindowOverflow { growths }
                })?;

            start = end + 1;
            end = clamp(new_end);
            growths += 1;

            trace!(start, end, "grew search window");
        }

        debug!(start, end, growths, "bracketed target");

        Ok(search_window(&source, &target, start, end + 1))
    }
}

/// Returns the index of the `target` within the ascending `source`, using a
/// [`DoublingSearch`] with the default growth limit.
///
/// # Errors
///
/// See [`DoublingSearch::search`].
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let arr = [
///     2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 15, 20, 21, 23, 30, 45, 50, 53, 59, 66, 70, 73, 79, 82,
///     88, 90, 91, 95, 99, 100,
/// ];
///
/// assert_eq!(unbounded_search(&arr, &59), Ok(Some(18)));
/// assert_eq!(unbounded_search(&arr, &61), Ok(None));
/// ```
pub fn unbounded_search<S: IndexedSource>(source: S, target: S::Item) -> Result<Option<usize>> {
    DoublingSearch::new().search(source, target)
}

/// Whether the value at `index` is smaller than `target`. Reads past the end
/// of the source are never smaller.
fn below<S: IndexedSource>(source: &S, index: usize, target: &S::Item) -> bool {
    source.get(index).is_some_and(|value| value < *target)
}

fn search_window<S: IndexedSource>(
    source: &S,
    target: &S::Item,
    mut lo: usize,
    mut hi: usize,
) -> Option<usize> {
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        let ord = match source.get(mid) {
            Some(value) => value.cmp(target),
            None => Ordering::Greater,
        };

        match ord {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::linear_search::linear_search;
    use crate::algorithms::comparisons::bits;
    use crate::algorithms::source::{FnSource, Padded};

    use core::cell::Cell;

    use proptest::prelude::*;

    const ARR: [i32; 30] = [
        2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 15, 20, 21, 23, 30, 45, 50, 53, 59, 66, 70, 73, 79, 82,
        88, 90, 91, 95, 99, 100,
    ];

    #[test]
    fn test_found() {
        assert_eq!(unbounded_search(&ARR, &59), Ok(Some(18)));
        assert_eq!(unbounded_search(&ARR, &2), Ok(Some(0)));
        assert_eq!(unbounded_search(&ARR, &3), Ok(Some(1)));
        assert_eq!(unbounded_search(&ARR, &100), Ok(Some(29)));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(unbounded_search(&ARR, &61), Ok(None));
        assert_eq!(unbounded_search(&ARR, &1), Ok(None));
        assert_eq!(unbounded_search(&ARR, &101), Ok(None));
    }

    #[test]
    fn test_empty_and_single() {
        let empty: &[i32] = &[];
        assert_eq!(unbounded_search(empty, &1), Ok(None));
        assert_eq!(unbounded_search(&[5], &5), Ok(Some(0)));
        assert_eq!(unbounded_search(&[5], &6), Ok(None));
    }

    #[test]
    fn test_padded_with_sentinel() {
        let padded = Padded::new(&ARR, &i32::MAX);
        assert_eq!(unbounded_search(padded, &59), Ok(Some(18)));
        assert_eq!(unbounded_search(padded, &101), Ok(None));
    }

    #[test]
    fn test_fn_source_without_data_end() {
        let data = ARR;
        let source = FnSource::new(move |i: usize| data.get(i).copied());
        assert_eq!(unbounded_search(source, 90), Ok(Some(25)));
        assert_eq!(unbounded_search(source, 1_000), Ok(None));
    }

    #[test]
    fn test_far_target() {
        let evens = FnSource::new(|i: usize| i.checked_mul(2));
        assert_eq!(unbounded_search(evens, 2_000_000), Ok(Some(1_000_000)));
        assert_eq!(unbounded_search(evens, 2_000_001), Ok(None));
    }

    #[test]
    fn test_reads_are_logarithmic_in_target_index() {
        let reads = Cell::new(0);
        let evens = FnSource::new(|i: usize| {
            reads.set(reads.get() + 1);
            i.checked_mul(2)
        });

        for index in [1, 2, 1_000, 65_536, 1_000_000] {
            reads.set(0);
            assert_eq!(unbounded_search(&evens, index * 2), Ok(Some(index)));
            // One read per growth while bracketing, then one per halving.
            let limit = 2 * bits(index) + 4;
            assert!(reads.get() <= limit, "index {index}: {} reads", reads.get());
        }

        reads.set(0);
        assert_eq!(unbounded_search(&evens, 2_000_001), Ok(None));
        assert!(reads.get() <= 2 * bits(1_000_000) + 4, "{} reads", reads.get());
    }

    #[test]
    fn test_reads_on_bounded_source_are_logarithmic() {
        let reads = Cell::new(0);
        let data: Vec<u32> = (0..1_024).collect();
        let source = FnSource::new(|i: usize| {
            reads.set(reads.get() + 1);
            data.get(i).copied()
        });

        for target in [0, 1, 511, 1_023, 1_024] {
            reads.set(0);
            let _ = unbounded_search(&source, target);
            assert!(reads.get() <= 2 * bits(1_024) + 4, "{target}: {} reads", reads.get());
        }
    }

    #[test]
    fn test_search_by_reference_keeps_source() {
        let data = ARR.to_vec();
        let owned = FnSource::new(move |i: usize| data.get(i).copied());

        assert_eq!(unbounded_search(&owned, 59), Ok(Some(18)));
        assert_eq!(unbounded_search(&owned, 61), Ok(None));
        assert_eq!(DoublingSearch::new().search(&owned, 2), Ok(Some(0)));
    }

    #[test]
    fn test_growth_limit() {
        let zeros = FnSource::new(|_: usize| Some(0));
        let search = DoublingSearch::new().max_growths(5);

        assert_eq!(
            search.search(zeros, 1),
            Err(SearchError::WindowOverflow { growths: 5 })
        );
        assert_eq!(search.search(zeros, 0), Ok(Some(1)));
    }

    #[test]
    fn test_index_space_exhausted() {
        let zeros = FnSource::new(|_: usize| Some(0u8));
        assert!(matches!(
            unbounded_search(zeros, 1),
            Err(SearchError::WindowOverflow { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let first = unbounded_search(&ARR, &73);
        assert_eq!(first, unbounded_search(&ARR, &73));
        assert_eq!(first, Ok(Some(21)));
    }

    proptest! {
        #[test]
        fn matches_linear(set in proptest::collection::btree_set(0..1_000u32, 0..200), target in 0..1_001u32) {
            let arr: Vec<u32> = set.into_iter().collect();
            prop_assert_eq!(unbounded_search(&arr, &target), Ok(linear_search(&arr, &target)));
        }
    }
}
