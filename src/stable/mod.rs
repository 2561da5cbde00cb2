//! Stable drivers: the merge sort family, the partition based stable quicksort and timsort.

pub mod mergesort;
pub mod mergesort_3way;
pub mod mergesort_bottom_up;
pub mod mergesort_in_place;
pub mod mergesort_insertion;
pub mod mergesort_weave;
pub mod stable_quicksort;
pub mod timsort;
