/// Dual-pivot partition of `v[left..=right]` using `v[left]` and `v[right]` as pivots.
///
/// The pivots are ordered first, so that `p1 = v[left]` is not after `p2 = v[right]`. Returns
/// `(low, high)`, the final indices of `p1` and `p2`:
///
/// - `v[left..low]` are before `p1`,
/// - `v[low + 1..high]` are neither before `p1` nor after `p2`,
/// - `v[high + 1..=right]` are not before `p2`.
///
/// Panics unless `left < right < v.len()`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_dual<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(left < right && right < v.len());

    if is_less(&v[right], &v[left]) {
        v.swap(left, right);
    }

    // The pivots stay at `left` and `right` until the final swaps, the scan only touches the
    // elements strictly between them.
    let mut new_left = left + 1;
    let mut new_right = right - 1;
    let mut select = left + 1;

    while select <= new_right {
        if is_less(&v[select], &v[left]) {
            v.swap(select, new_left);
            new_left += 1;
        } else if !is_less(&v[select], &v[right]) {
            while select < new_right && is_less(&v[right], &v[new_right]) {
                new_right -= 1;
            }

            v.swap(select, new_right);
            new_right -= 1;

            // Re-check the element swapped in, unless `select` itself just joined the upper zone.
            if select <= new_right && is_less(&v[select], &v[left]) {
                v.swap(select, new_left);
                new_left += 1;
            }
        }

        select += 1;
    }

    new_left -= 1;
    new_right += 1;

    v.swap(left, new_left);
    v.swap(right, new_right);

    (new_left, new_right)
}
