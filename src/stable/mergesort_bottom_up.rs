//! Iterative bottom-up merge sort.
//!
//! Adjacent runs of width 1, 2, 4, ... are merged until a single run covers the input. The plain
//! entry points allocate temporaries per merge, the `*_with_buffer` entry points reuse a scratch
//! buffer supplied by the caller instead.

use std::cmp;

use crate::merge::{merging, merging_with_buffer};
use crate::order;

sort_impl!("mergesort_bottom_up_stable", mergesort_bottom_up, Clone);

/// Sorts `v` in ascending order, using `buffer` as scratch space.
///
/// Panics if `buffer` is shorter than `v`.
#[inline]
pub fn sort_with_buffer<T>(v: &mut [T], buffer: &mut [T])
where
    T: Ord + Clone,
{
    mergesort_bottom_up_with_buffer(v, buffer, &mut order::ascending::<T>);
}

/// Sorts `v` in descending order, using `buffer` as scratch space.
///
/// Panics if `buffer` is shorter than `v`.
#[inline]
pub fn sort_descending_with_buffer<T>(v: &mut [T], buffer: &mut [T])
where
    T: Ord + Clone,
{
    mergesort_bottom_up_with_buffer(v, buffer, &mut order::descending::<T>);
}

/// Sorts `v` with the comparator function `compare`, using `buffer` as scratch space.
///
/// Panics if `buffer` is shorter than `v`.
#[inline]
pub fn sort_by_with_buffer<T, F>(v: &mut [T], buffer: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> cmp::Ordering,
{
    mergesort_bottom_up_with_buffer(v, buffer, &mut order::by(compare));
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort_bottom_up<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    for_each_merge(v.len(), |left, mid, right| {
        merging(v, left, mid, right, is_less);
    });
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort_bottom_up_with_buffer<T, F>(v: &mut [T], buffer: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        buffer.len() >= v.len(),
        "scratch buffer of len {} is shorter than the input of len {}",
        buffer.len(),
        v.len()
    );

    for_each_merge(v.len(), |left, mid, right| {
        merging_with_buffer(v, left, mid, right, buffer, is_less);
    });
}

/// Calls `merge_step(left, mid, right)` for every pair of adjacent runs, pass by pass.
///
/// The last run of a pass may be short or missing, in which case `mid >= right` and the merge is
/// a no-op.
fn for_each_merge(len: usize, mut merge_step: impl FnMut(usize, usize, usize)) {
    let mut width = 1;

    while width < len {
        for left in (0..len).step_by(2 * width) {
            let mid = left + width - 1;
            let right = cmp::min(left + 2 * width, len) - 1;

            merge_step(left, mid, right);
        }

        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length() {
        let mut v = [5, 3, 8, 1, 9, 2, 7];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn caller_buffer() {
        let mut v = [5, 3, 8, 1, 9, 2, 7];
        let mut buffer = [0; 10];
        sort_with_buffer(&mut v, &mut buffer);
        assert_eq!(v, [1, 2, 3, 5, 7, 8, 9]);

        sort_descending_with_buffer(&mut v, &mut buffer);
        assert_eq!(v, [9, 8, 7, 5, 3, 2, 1]);

        let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let mut buffer = v;
        sort_by_with_buffer(&mut v, &mut buffer, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    #[should_panic]
    fn short_buffer() {
        let mut v = [3, 2, 1];
        let mut buffer = [0; 2];
        sort_with_buffer(&mut v, &mut buffer);
    }

    #[test]
    fn merge_schedule() {
        let mut steps = Vec::new();
        for_each_merge(5, |left, mid, right| steps.push((left, mid, right)));
        assert_eq!(
            steps,
            [
                (0, 0, 1),
                (2, 2, 3),
                (4, 4, 4),
                (0, 1, 3),
                (4, 5, 4),
                (0, 3, 4)
            ]
        );

        steps.clear();
        for_each_merge(1, |left, mid, right| steps.push((left, mid, right)));
        assert!(steps.is_empty());
    }
}
