//! Out-of-place stable quicksort.
//!
//! The middle element is taken as pivot and everything else is distributed into a "before" and an
//! "after" list. Elements equivalent to the pivot are routed by their position relative to it,
//! which keeps their original order. Every level allocates fresh lists, so this trades memory for
//! simplicity.
//!
//! Besides the slice entry points there is a family operating on owned `Vec`s, which moves the
//! elements instead of cloning them.

use std::cmp;
use std::mem;
use std::ops::RangeBounds;

use crate::order;

sort_impl!("stable_quicksort_stable", stable_quicksort, Clone);

/// Sorts `v` in ascending order, moving the elements instead of cloning them.
#[inline]
pub fn sort_vec<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    *v = stable_recursive(mem::take(v), &mut order::ascending::<T>);
}

/// Sorts `v` in descending order, moving the elements instead of cloning them.
#[inline]
pub fn sort_vec_descending<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    *v = stable_recursive(mem::take(v), &mut order::descending::<T>);
}

/// Sorts `v` with the comparator function `compare`, moving the elements instead of cloning them.
#[inline]
pub fn sort_vec_by<T, F>(v: &mut Vec<T>, compare: F)
where
    F: FnMut(&T, &T) -> cmp::Ordering,
{
    *v = stable_recursive(mem::take(v), &mut order::by(compare));
}

/// Sorts `v[range]` in ascending order, moving the elements instead of cloning them. Inverted
/// ranges leave `v` untouched.
#[inline]
pub fn sort_vec_range<T, R>(v: &mut Vec<T>, range: R)
where
    T: Ord,
    R: RangeBounds<usize>,
{
    sort_vec_range_with(v, range, &mut order::ascending::<T>);
}

/// Sorts `v[range]` in descending order, moving the elements instead of cloning them. Inverted
/// ranges leave `v` untouched.
#[inline]
pub fn sort_vec_range_descending<T, R>(v: &mut Vec<T>, range: R)
where
    T: Ord,
    R: RangeBounds<usize>,
{
    sort_vec_range_with(v, range, &mut order::descending::<T>);
}

/// Sorts `v[range]` with the comparator function `compare`, moving the elements instead of cloning
/// them. Inverted ranges leave `v` untouched.
#[inline]
pub fn sort_vec_range_by<T, R, F>(v: &mut Vec<T>, range: R, compare: F)
where
    R: RangeBounds<usize>,
    F: FnMut(&T, &T) -> cmp::Ordering,
{
    sort_vec_range_with(v, range, &mut order::by(compare));
}

fn sort_vec_range_with<T, R, F>(v: &mut Vec<T>, range: R, is_less: &mut F)
where
    R: RangeBounds<usize>,
    F: FnMut(&T, &T) -> bool,
{
    let Some(range) = crate::resolve_range(v.len(), range) else {
        return;
    };

    let start = range.start;
    let part: Vec<T> = v.drain(range).collect();
    let sorted = stable_recursive(part, is_less);
    v.splice(start..start, sorted);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn stable_quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let sorted = stable_recursive(v.to_vec(), is_less);

    for (dst, src) in v.iter_mut().zip(sorted) {
        *dst = src;
    }
}

/// Consumes `list` and returns its elements in sorted order.
///
/// Partitions are kept on an explicit work stack rather than the call stack, inputs like pipe
/// organs would otherwise recurse once per element.
pub fn stable_recursive<T, F>(list: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut sorted = Vec::with_capacity(list.len());

    // Last in, first out. Each partition is pushed as after, pivot, before.
    let mut pending = vec![Pending::Unsorted(list)];

    while let Some(next) = pending.pop() {
        match next {
            Pending::Pivot(pivot) => sorted.push(pivot),
            Pending::Unsorted(list) if list.len() < 2 => sorted.extend(list),
            Pending::Unsorted(list) => {
                let (before, pivot, after) = split_at_middle(list, is_less);

                pending.push(Pending::Unsorted(after));
                pending.push(Pending::Pivot(pivot));
                pending.push(Pending::Unsorted(before));
            }
        }
    }

    sorted
}

enum Pending<T> {
    Unsorted(Vec<T>),
    Pivot(T),
}

// Takes the middle element as pivot and distributes the rest, keeping the relative order inside
// each side. `list` must not be empty.
fn split_at_middle<T, F>(mut list: Vec<T>, is_less: &mut F) -> (Vec<T>, T, Vec<T>)
where
    F: FnMut(&T, &T) -> bool,
{
    let mid = list.len() / 2;
    let pivot = list.remove(mid);

    let mut before = Vec::new();
    let mut after = Vec::new();

    let mut is_greater = order::reversed(&mut *is_less);

    for (i, elem) in list.into_iter().enumerate() {
        // `i` is the position after removing the pivot, it is smaller than `mid` exactly for the
        // elements that came before the pivot.
        if is_greater(&pivot, &elem) {
            before.push(elem);
        } else if is_greater(&elem, &pivot) {
            after.push(elem);
        } else if i < mid {
            before.push(elem);
        } else {
            after.push(elem);
        }
    }

    (before, pivot, after)
}
