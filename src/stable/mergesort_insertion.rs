//! Top-down merge sort that hands short ranges to insertion sort.

use crate::insertion::insertion_sort;
use crate::merge::merging;

sort_impl!("mergesort_insertion_stable", mergesort_insertion, Clone);

/// Ranges whose `right - left` is at most this are insertion sorted instead of split further.
pub const MERGE_THRESHOLD: usize = 10;

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort_insertion<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    sort_between(v, 0, len - 1, is_less);
}

fn sort_between<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    if right - left <= MERGE_THRESHOLD {
        insertion_sort(v, left, right, is_less);
        return;
    }

    let mid = left + (right - left) / 2;
    sort_between(v, left, mid, is_less);
    sort_between(v, mid + 1, right, is_less);
    merging(v, left, mid, right, is_less);
}
