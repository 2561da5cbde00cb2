//! Dual-pivot quicksort, the outermost elements of each range serve as the two pivots.

use crate::partition::partition_dual;

sort_impl!("dual_pivot_quicksort_unstable", dual_pivot_quicksort);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn dual_pivot_quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len < 2 {
            return;
        }

        let (low, high) = partition_dual(v, 0, len - 1, is_less);

        let (lower, rest) = v.split_at_mut(low);
        let (middle, upper) = rest[1..].split_at_mut(high - low - 1);
        let upper = &mut upper[1..];

        // Recurse into the two shorter regions, keep looping on the longest.
        let mut regions = [lower, middle, upper];
        regions.sort_unstable_by_key(|region| region.len());
        let [shortest, second, longest] = regions;

        dual_pivot_quicksort(shortest, is_less);
        dual_pivot_quicksort(second, is_less);
        v = longest;
    }
}
