//! Textbook quicksort with the Lomuto partition and the last element as pivot.
//!
//! No pivot sampling, so sorted and reversed inputs take O(n^2) time. The driver always recurses
//! into the shorter side and loops on the longer one, that keeps the stack at O(log n) regardless.

use crate::partition::partition;

sort_impl!("quicksort_unstable", quicksort);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len < 2 {
            // These inputs are always sorted.
            return;
        }

        let pivot_pos = partition(v, 0, len - 1, is_less);

        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
