/// Three-way (Dutch national flag) partition of `v[left..=right]` around the pivot `v[right]`.
///
/// Returns `(eq_start, gt_start)` such that `v[left..eq_start]` are before the pivot,
/// `v[eq_start..gt_start]` are equivalent to it and `v[gt_start..=right]` are after it. The
/// equal zone always contains at least the pivot.
///
/// Panics if `right` is out of bounds or `left > right`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_three_way<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(left <= right && right < v.len());

    // Park the pivot at `left` so it stays put while the rest of the range is scanned.
    v.swap(left, right);

    let mut lt = left + 1;
    let mut i = left + 1;
    let mut gt = right + 1;

    while i < gt {
        if is_less(&v[i], &v[left]) {
            v.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(&v[left], &v[i]) {
            gt -= 1;
            v.swap(i, gt);
        } else {
            i += 1;
        }
    }

    // Move the pivot to the front of the equal zone.
    v.swap(left, lt - 1);

    (lt - 1, gt)
}
