//! In-place, unstable quicksort drivers.

pub mod dual_pivot_quicksort;
pub mod quicksort;
pub mod quicksort_3way;
