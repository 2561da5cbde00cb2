//! Partition schemes used by the quicksort drivers.
//!
//! All of them work on an inclusive index range `left..=right`, take the pivot(s) from the range
//! itself and only move elements with swaps.

mod dual_pivot;
mod lomuto;
mod three_way;

pub use dual_pivot::partition_dual;
pub use lomuto::partition;
pub use three_way::partition_three_way;
