//! Random access to ordered values whose length may not be known.
//!
//! [`IndexedSource`] is the only thing the [doubling search] needs from its
//! input: a way to read the value at an index. Slices, arrays and vectors are
//! sources with a known length; [`FnSource`] and [`Padded`] describe sources
//! without one.
//!
//! [doubling search]: crate::algorithms::unbounded

/// How far an [`IndexedSource`] extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Every index below the given length holds a value.
    Bounded(usize),
    /// No upper bound is known; any index may be probed.
    Unbounded,
}

/// A sequence of ordered values that can be read by index.
///
/// `get` returning [`None`] means the index lies past the real data. Searches
/// treat such a probe as larger than any value, so a source backed by finite
/// data behaves like that data followed by an infinite run of "infinity".
pub trait IndexedSource {
    /// Type of the values read from the source.
    type Item: Ord;

    /// Reads the value at `index`.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// How far the source extends, [`Extent::Unbounded`] unless overridden.
    fn extent(&self) -> Extent {
        Extent::Unbounded
    }
}

/// Borrowing a source is a source too, so one that is not `Copy` can be
/// searched more than once.
impl<S: IndexedSource + ?Sized> IndexedSource for &S {
    type Item = S::Item;

    #[inline]
    fn get(&self, index: usize) -> Option<S::Item> {
        (**self).get(index)
    }

    fn extent(&self) -> Extent {
        (**self).extent()
    }
}

impl<'a, T: Ord> IndexedSource for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn get(&self, index: usize) -> Option<&'a T> {
        <[T]>::get(*self, index)
    }

    fn extent(&self) -> Extent {
        Extent::Bounded(self.len())
    }
}

impl<'a, T: Ord, const N: usize> IndexedSource for &'a [T; N] {
    type Item = &'a T;

    #[inline]
    fn get(&self, index: usize) -> Option<&'a T> {
        <[T]>::get(*self, index)
    }

    fn extent(&self) -> Extent {
        Extent::Bounded(N)
    }
}

impl<'a, T: Ord> IndexedSource for &'a Vec<T> {
    type Item = &'a T;

    #[inline]
    fn get(&self, index: usize) -> Option<&'a T> {
        <[T]>::get(*self, index)
    }

    fn extent(&self) -> Extent {
        Extent::Bounded(self.len())
    }
}

/// An unbounded source computed by a closure.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// // The even numbers, without end.
/// let evens = FnSource::new(|i: usize| i.checked_mul(2));
///
/// assert_eq!(evens.get(21), Some(42));
/// assert_eq!(evens.extent(), Extent::Unbounded);
/// ```
#[derive(Clone, Copy)]
pub struct FnSource<F> {
    f: F,
}

impl<F> FnSource<F> {
    /// Wraps `f`, which maps an index to the value stored there.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, T> IndexedSource for FnSource<F>
where
    F: Fn(usize) -> Option<T>,
    T: Ord,
{
    type Item = T;

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        (self.f)(index)
    }
}

impl<F> core::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

/// A finite slice followed by an endless run of a sentinel value.
///
/// This is the classic "infinite array": reads past the end of the data
/// return the sentinel, which must compare greater than or equal to every
/// target searched for.
///
/// # Examples
///
/// ```
/// use dsa_search::prelude::*;
///
/// let data = [2, 3, 5];
/// let padded = Padded::new(&data, &i32::MAX);
///
/// assert_eq!(padded.get(1), Some(&3));
/// assert_eq!(padded.get(1_000), Some(&i32::MAX));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Padded<'a, T> {
    data: &'a [T],
    sentinel: &'a T,
}

impl<'a, T> Padded<'a, T> {
    /// Pads `data` with `sentinel` on the right, forever.
    pub const fn new(data: &'a [T], sentinel: &'a T) -> Self {
        Self { data, sentinel }
    }
}

impl<'a, T: Ord> IndexedSource for Padded<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self, index: usize) -> Option<&'a T> {
        Some(self.data.get(index).unwrap_or(self.sentinel))
    }
}
