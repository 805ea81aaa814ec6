use std::convert::Infallible;

use crate::{
    constants::{ENABLE_PREFIX_CHECKS, TRACE_STEPS},
    debug, is_less_to_le,
    stats::SortStats,
    util::test_sorted_landing,
    Less,
};

/// Sorts `v` in place with adjacent swaps, which is *O*(*n*^2) worst-case and *O*(*n*) on
/// sorted input.
///
/// Elements only move on `is_less(&v[j], &v[j - 1])`, so equal elements keep their order.
/// `is_less` may be an inconsistent order, so nothing is asserted about the result.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &F) -> SortStats
where
    F: Less<T>,
{
    infallible_insertion_sort(v, is_less, &mut |_: &[T], _: usize, _: usize| {})
}

/// [`insertion_sort`] for orders known to be total, such as `Ord` impls.
/// Debug builds check where every step landed and the whole slice at the end.
pub(crate) fn checked_insertion_sort<T, F>(v: &mut [T], is_less: &F) -> SortStats
where
    F: Less<T>,
{
    let stats = infallible_insertion_sort(v, is_less, &mut |v: &[T], i: usize, j: usize| {
        if ENABLE_PREFIX_CHECKS {
            debug_assert!(test_sorted_landing(v, i, j, is_less));
        }
    });
    debug_assert!(v.is_sorted_by(is_less_to_le!(is_less)));
    stats
}

fn infallible_insertion_sort<T, F, S>(v: &mut [T], is_less: &F, after_step: &mut S) -> SortStats
where
    F: Less<T>,
    S: FnMut(&[T], usize, usize),
{
    let mut stats = SortStats::default();
    let result: Result<(), Infallible> = try_insertion_sort(
        v,
        &mut |a: &T, b: &T| Ok(is_less(a, b)),
        &mut stats,
        after_step,
    );
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
    stats
}

/// Same as [`insertion_sort`] with a fallible `is_less`.
///
/// The first `Err` is returned as is. Since elements only ever swap, `v` is still a permutation
/// of its input when that happens.
pub(crate) fn try_insertion_sort<T, E, F, S>(
    v: &mut [T],
    is_less: &mut F,
    stats: &mut SortStats,
    after_step: &mut S,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
    S: FnMut(&[T], usize, usize),
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if !is_less(&v[j], &v[j - 1])? {
                break;
            }
            v.swap(j - 1, j);
            stats.swaps += 1;
            j -= 1;
        }
        if TRACE_STEPS {
            debug!("insertion step {}: {} swaps, landed at {}", i, i - j, j);
        }
        after_step(v, i, j);
    }
    Ok(())
}
