//! Insertion sort over an inclusive index range. Quadratic, stable, used to prepare short runs.

/// Sorts `v[from..=to]` in ascending order.
#[inline]
pub fn insertion_sort_ascending<T: Ord>(v: &mut [T], from: usize, to: usize) {
    insertion_sort(v, from, to, &mut |a, b| a.lt(b));
}

/// Sorts `v[from..=to]` in descending order.
#[inline]
pub fn insertion_sort_descending<T: Ord>(v: &mut [T], from: usize, to: usize) {
    insertion_sort(v, from, to, &mut |a, b| b.lt(a));
}

/// Sorts `v[from..=to]` according to `is_less`. Does nothing if `from >= to`.
///
/// Panics if `to` is out of bounds and the range is non-empty.
pub fn insertion_sort<T, F>(v: &mut [T], from: usize, to: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if from >= to {
        return;
    }

    assert!(to < v.len(), "insertion range end {to} out of bounds");

    for i in (from + 1)..=to {
        // Sift the new element left until it no longer goes before its neighbour. Equal elements
        // are never passed, which keeps the sort stable.
        let mut j = i;
        while j > from && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
