use crate::Less;

/// After the outer step for position `i` moved its element down to `j`, `v[..=i]` must be sorted.
///
/// `v[..i]` was sorted before the step and the step only shifted `v[j..i]` right by one, so it is
/// enough to check the inserted element against its neighbours inside `..=i`.
pub(crate) fn test_sorted_landing<T, F>(v: &[T], i: usize, j: usize, is_less: &F) -> bool
where
    F: Less<T>,
{
    debug_assert!(j <= i && i < v.len());
    if j > 0 && is_less(&v[j], &v[j - 1]) {
        println!("step {i}: element landed at {j} is smaller than its left neighbour");
        return false;
    }
    if j < i && is_less(&v[j + 1], &v[j]) {
        println!("step {i}: element landed at {j} is greater than its right neighbour");
        return false;
    }
    true
}
