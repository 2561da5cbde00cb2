//! Merge routines shared by the merge based drivers.
//!
//! Two-way merges use inclusive bounds, `[left, mid]` and `[mid + 1, right]`. The three-way merge
//! uses half-open runs like the ping-pong sort that drives it. Every routine prefers the earlier
//! run on ties, so all of them are stable.

mod in_place;
mod three_way;
mod two_way;

pub use in_place::merging_in_place;
pub use three_way::merging_three;
pub use two_way::{merging, merging_slices, merging_with_buffer};
