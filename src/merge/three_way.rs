/// Merges the sorted half-open runs `src[left..mid1]`, `src[mid1..mid2]` and `src[mid2..right]`
/// into `dst[left..right]`.
///
/// Any of the runs may be empty. On ties the run that comes first in `src` wins.
///
/// Panics unless `left <= mid1 <= mid2 <= right` and both `src` and `dst` hold index `right - 1`.
pub fn merging_three<T, F>(
    src: &[T],
    left: usize,
    mid1: usize,
    mid2: usize,
    right: usize,
    dst: &mut [T],
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    assert!(left <= mid1 && mid1 <= mid2 && mid2 <= right);
    assert!(right <= src.len() && right <= dst.len());

    let (mut i, mut j, mut k, mut out) = (left, mid1, mid2, left);

    while i < mid1 && j < mid2 && k < right {
        if !is_less(&src[j], &src[i]) && !is_less(&src[k], &src[i]) {
            dst[out] = src[i].clone();
            i += 1;
        } else if !is_less(&src[k], &src[j]) {
            dst[out] = src[j].clone();
            j += 1;
        } else {
            dst[out] = src[k].clone();
            k += 1;
        }
        out += 1;
    }

    // One run is exhausted, finish with the remaining pair in their original order.
    let out = if i == mid1 {
        merge_pair(src, j..mid2, k..right, dst, out, is_less)
    } else if j == mid2 {
        merge_pair(src, i..mid1, k..right, dst, out, is_less)
    } else {
        merge_pair(src, i..mid1, j..mid2, dst, out, is_less)
    };

    debug_assert_eq!(out, right);
}

fn merge_pair<T, F>(
    src: &[T],
    mut first: std::ops::Range<usize>,
    mut second: std::ops::Range<usize>,
    dst: &mut [T],
    mut out: usize,
    is_less: &mut F,
) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    while !first.is_empty() && !second.is_empty() {
        if is_less(&src[second.start], &src[first.start]) {
            dst[out] = src[second.start].clone();
            second.start += 1;
        } else {
            dst[out] = src[first.start].clone();
            first.start += 1;
        }
        out += 1;
    }

    for idx in first.chain(second) {
        dst[out] = src[idx].clone();
        out += 1;
    }

    out
}
