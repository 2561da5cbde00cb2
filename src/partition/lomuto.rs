/// Lomuto partition of `v[left..=right]` around the pivot `v[right]`.
///
/// Returns the final index of the pivot. Everything before it is not after the pivot, everything
/// behind it is not before the pivot. Equal elements end up on the right side.
///
/// Panics if `right` is out of bounds or `left > right`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(left <= right && right < v.len());

    // `store` is the first slot of the not-less region.
    let mut store = left;

    for j in left..right {
        if is_less(&v[j], &v[right]) {
            v.swap(store, j);
            store += 1;
        }
    }

    v.swap(store, right);

    store
}
