use crate::order;

/// Merges the sorted runs `v[left..=mid]` and `v[mid + 1..=right]`.
///
/// Both runs are copied into temporaries for the duration of the call. Does nothing if either run
/// is empty.
pub fn merging<T, F>(v: &mut [T], left: usize, mid: usize, right: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if left > mid || mid + 1 > right {
        return;
    }

    let left_run = v[left..=mid].to_vec();
    let right_run = v[(mid + 1)..=right].to_vec();

    merging_slices(&mut v[left..=right], &left_run, &right_run, is_less);
}

/// Merges the sorted runs `v[left..=mid]` and `v[mid + 1..=right]` through `buffer`.
///
/// `buffer` is indexed with the same indices as `v`, so it has to be at least `right + 1` long.
/// Only `buffer[left..=right]` is written. Does nothing if either run is empty.
pub fn merging_with_buffer<T, F>(
    v: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    buffer: &mut [T],
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if left > mid || mid + 1 > right {
        return;
    }

    assert!(
        buffer.len() > right,
        "scratch buffer of len {} can't hold index {right}",
        buffer.len()
    );

    let mut left_first = order::or_equal(&mut *is_less);

    let mut n1 = left;
    let mut n2 = mid + 1;
    for out in buffer[left..=right].iter_mut() {
        if n1 <= mid && (n2 > right || left_first(&v[n1], &v[n2])) {
            *out = v[n1].clone();
            n1 += 1;
        } else {
            *out = v[n2].clone();
            n2 += 1;
        }
    }

    v[left..=right].clone_from_slice(&buffer[left..=right]);
}

/// Merges the sorted `left_run` and `right_run` into the front of `dst`.
///
/// Panics if `dst` is shorter than both runs together.
pub fn merging_slices<T, F>(dst: &mut [T], left_run: &[T], right_run: &[T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (n1, n2) = (left_run.len(), right_run.len());
    assert!(dst.len() >= n1 + n2);

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < n1 && j < n2 {
        // Consume the lesser side. If equal, prefer the left run to maintain stability.
        if is_less(&right_run[j], &left_run[i]) {
            dst[k] = right_run[j].clone();
            j += 1;
        } else {
            dst[k] = left_run[i].clone();
            i += 1;
        }
        k += 1;
    }

    // At most one of these is non-empty.
    dst[k..(k + n1 - i)].clone_from_slice(&left_run[i..]);
    k += n1 - i;
    dst[k..(k + n2 - j)].clone_from_slice(&right_run[j..]);
}
