//! Simplified timsort.
//!
//! The input is cut into blocks of `min_run_length(MIN_MERGE)` elements, each block is sorted with
//! insertion sort, and then adjacent runs are merged pairwise with doubling width, like the
//! bottom-up merge sort. There is no natural run detection and no galloping.

use std::cmp;

use crate::insertion::insertion_sort;
use crate::merge::merging_with_buffer;

sort_impl!("timsort_stable", timsort, Clone);

pub const MIN_MERGE: usize = 32;

/// Returns the run length used for sequences of length `n`.
///
/// Values below `MIN_MERGE` are returned unchanged. Larger values are halved until they drop
/// below `MIN_MERGE`, and the result is rounded up if any bit shifted out was set.
pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;

    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }

    n + r
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn timsort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let min_run = min_run_length(MIN_MERGE);

    for start in (0..len).step_by(min_run) {
        let end = cmp::min(start + min_run, len) - 1;
        insertion_sort(v, start, end, is_less);
    }

    if len <= min_run {
        return;
    }

    let mut buffer = v.to_vec();
    let mut size = min_run;

    while size < len {
        for left in (0..len).step_by(2 * size) {
            let mid = left + size - 1;
            let right = cmp::min(left + 2 * size, len) - 1;

            merging_with_buffer(v, left, mid, right, &mut buffer, is_less);
        }

        size *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_length() {
        assert_eq!(min_run_length(0), 0);
        assert_eq!(min_run_length(31), 31);
        assert_eq!(min_run_length(32), 16);
        assert_eq!(min_run_length(33), 17);
        assert_eq!(min_run_length(64), 16);
        assert_eq!(min_run_length(65), 17);
    }

    #[test]
    fn empty() {
        let mut v: [i32; 0] = [];
        sort(&mut v);
        sort_descending(&mut v);
        assert!(v.is_empty());
    }

    #[test]
    fn exactly_one_run() {
        let mut v: Vec<i32> = (0..16).rev().collect();
        sort(&mut v);
        assert!(v.iter().copied().eq(0..16));
    }

    #[test]
    fn partial_last_run() {
        let mut v: Vec<i32> = (0..101).map(|i| (i * 53) % 101).collect();
        sort_descending(&mut v);
        assert!(v.iter().copied().eq((0..101).rev()));
    }

    #[test]
    fn stable_across_runs() {
        let mut v: Vec<(u8, usize)> = (0..200).map(|i| ((i % 4) as u8, i)).collect();
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        for w in v.windows(2) {
            assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
    }
}
