//! Test helpers for counting how much work a search does.

use core::cell::Cell;
use core::cmp::Ordering;

/// An integer that bumps a shared counter every time it is compared.
#[derive(Debug)]
pub(crate) struct Counted<'c> {
    value: i32,
    comparisons: &'c Cell<usize>,
}

impl<'c> Counted<'c> {
    pub(crate) fn new(value: i32, comparisons: &'c Cell<usize>) -> Self {
        Self { value, comparisons }
    }
}

impl Ord for Counted<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Counted<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Counted<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted<'_> {}

/// Wraps every value of `values`, sharing one counter.
pub(crate) fn counted<'c>(values: &[i32], comparisons: &'c Cell<usize>) -> Vec<Counted<'c>> {
    values
        .iter()
        .map(|&value| Counted::new(value, comparisons))
        .collect()
}

/// Number of bits needed to write `n`, i.e. `floor(log2(n)) + 1`.
pub(crate) fn bits(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

mod tests {
    use super::*;

    #[test]
    fn test_counts_every_comparison() {
        let comparisons = Cell::new(0);
        let a = Counted::new(1, &comparisons);
        let b = Counted::new(2, &comparisons);

        assert!(a < b);
        assert!(a != b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(comparisons.get(), 3);
    }

    #[test]
    fn test_bits() {
        assert_eq!(bits(0), 0);
        assert_eq!(bits(1), 1);
        assert_eq!(bits(1_024), 11);
        assert_eq!(bits(1_000_000), 20);
    }
}
