//! In-place, stable insertion sort over slices.

use crate::insertion_sort::{checked_insertion_sort, insertion_sort, try_insertion_sort};
use std::cmp::Ordering;

mod constants;
mod insertion_sort;
mod stats;
mod util;

pub use stats::SortStats;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Sorts the slice in place, in non-decreasing order.
///
/// The sort is stable and allocates nothing. It takes *O*(*n*) time on sorted input and
/// *O*(*n*^2) time in the worst case (reversed input).
///
/// # Examples
///
/// ```
/// let mut v = [5, 2, 4, 6, 1, 3];
/// insertion_sort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    checked_insertion_sort(v, &T::lt);
}

/// Sorts the slice in place with a comparator function.
///
/// The comparator must define a total order. If it does not, the resulting order is
/// unspecified, but the call still terminates and `v` stays a permutation of its input.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    insertion_sort(v, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts the slice in place by the key `f` extracts from each element.
///
/// The key is recomputed on every comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    checked_insertion_sort(v, &|a: &T, b: &T| f(a).lt(&f(b)));
}

/// Sorts the slice in place with a comparator that can fail.
///
/// The first error returned by `compare` ends the sort and is handed back unchanged. At that
/// point `v` holds the same elements as before, in an unspecified order.
///
/// # Examples
///
/// ```
/// let mut v = ["3", "1", "x"];
/// let result = insertion_sort::try_sort_by(&mut v, |a, b| {
///     Ok::<_, std::num::ParseIntError>(a.parse::<u32>()?.cmp(&b.parse::<u32>()?))
/// });
/// assert!(result.is_err());
/// ```
pub fn try_sort_by<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    try_insertion_sort(
        v,
        &mut |a: &T, b: &T| -> Result<bool, E> { Ok(compare(a, b)? == Ordering::Less) },
        &mut SortStats::default(),
        &mut |_: &[T], _: usize, _: usize| {},
    )
}

/// Like [`sort`], also reporting how many comparisons and swaps it took.
#[inline]
pub fn sort_with_stats<T>(v: &mut [T]) -> SortStats
where
    T: Ord,
{
    checked_insertion_sort(v, &T::lt)
}

/// Like [`sort_by`], also reporting how many comparisons and swaps it took.
#[inline]
pub fn sort_by_with_stats<T, F>(v: &mut [T], compare: F) -> SortStats
where
    F: Fn(&T, &T) -> Ordering,
{
    insertion_sort(v, &|a: &T, b: &T| compare(a, b) == Ordering::Less)
}
