/// Work done by a single insertion sort call.
///
/// `swaps` is exactly the number of inversions in the input, i.e. pairs `p < q` with
/// `v[p] > v[q]`. `comparisons` is at most `swaps + len - 1`: every step ends either on a
/// comparison that did not lead to a swap, or by reaching the front of the slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}
