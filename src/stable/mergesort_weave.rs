//! Merge sort over owned copies.
//!
//! Each half is copied into its own vector and sorted there, then both are woven back into the
//! input. Allocates at every level.

use crate::merge::merging_slices;

sort_impl!("mergesort_weave_stable", mergesort_weave, Clone);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort_weave<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    mergesort_weave(&mut left, is_less);
    mergesort_weave(&mut right, is_less);

    merging_slices(v, &left, &right, is_less);
}
