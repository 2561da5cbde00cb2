//! Quicksort with a three-way partition. Elements equivalent to the pivot are excluded from both
//! recursions, which makes inputs with few distinct values cheap.

use crate::partition::partition_three_way;

sort_impl!("quicksort_3way_unstable", quicksort_3way);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn quicksort_3way<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len < 2 {
            return;
        }

        let (eq_start, gt_start) = partition_three_way(v, 0, len - 1, is_less);

        let (lower, rest) = v.split_at_mut(eq_start);
        let upper = &mut rest[(gt_start - eq_start)..];

        if lower.len() < upper.len() {
            quicksort_3way(lower, is_less);
            v = upper;
        } else {
            quicksort_3way(upper, is_less);
            v = lower;
        }
    }
}
