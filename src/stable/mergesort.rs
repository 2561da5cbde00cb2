//! Top-down recursive merge sort.
//!
//! The split point of each child range is derived from the parent's split point rather than from
//! the child's own bounds, so sub-ranges are not always halved evenly. The result is still sorted
//! and the recursion depth stays logarithmic.

use crate::merge::merging;

sort_impl!("mergesort_stable", mergesort, Clone);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    merge(v, 0, len / 2, len - 1, is_less);
}

/// Sorts `v[left..=right]`, splitting it after `mid`.
///
/// Does nothing if `left >= right`. Expects `mid <= right` when the range is non-trivial.
pub fn merge<T, F>(v: &mut [T], left: usize, mid: usize, right: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    debug_assert!(left <= mid && mid <= right);

    merge(v, left, (left + mid) / 2, mid, is_less);
    merge(v, mid + 1, (mid + 1 + right) / 2, right, is_less);
    merging(v, left, mid, right, is_less);
}
