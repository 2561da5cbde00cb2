/// Merges the sorted runs `v[left..=mid]` and `v[mid + 1..=right]` without auxiliary memory.
///
/// Each element of the right run that goes before the current left element is rotated into place,
/// which costs O(n) moves per element in the worst case. Does nothing if either run is empty or
/// the runs are already in order.
pub fn merging_in_place<T, F>(
    v: &mut [T],
    mut left: usize,
    mut mid: usize,
    right: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    if left > mid || mid + 1 > right {
        return;
    }

    let mut start = mid + 1;

    if !is_less(&v[start], &v[mid]) {
        return;
    }

    while left <= mid && start <= right {
        if !is_less(&v[start], &v[left]) {
            left += 1;
        } else {
            v[left..=start].rotate_right(1);

            left += 1;
            mid += 1;
            start += 1;
        }
    }
}
