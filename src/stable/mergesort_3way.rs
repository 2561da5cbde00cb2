//! Three-way merge sort. Each range is split into thirds, which are sorted into the scratch copy
//! and then merged back. The roles of the two arrays alternate with every level of recursion, so
//! no merge ever copies its output back.

use crate::merge::merging_three;

sort_impl!("mergesort_3way_stable", mergesort_3way, Clone);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort_3way<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let mut scratch = v.to_vec();
    sort_into(v, 0, len, &mut scratch, is_less);
}

// Sorts `dst[left..right]`, with `src[left..right]` holding the same elements on entry. `src` is
// clobbered in that range.
fn sort_into<T, F>(dst: &mut [T], left: usize, right: usize, src: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = right - left;

    if len < 2 {
        return;
    }

    let mid1 = left + len / 3;
    let mid2 = left + 2 * (len / 3) + 1;

    sort_into(src, left, mid1, dst, is_less);
    sort_into(src, mid1, mid2, dst, is_less);
    sort_into(src, mid2, right, dst, is_less);

    merging_three(src, left, mid1, mid2, right, dst, is_less);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs() {
        for len in 0..64 {
            let mut v: Vec<i32> = (0..len).map(|i| (i * 37) % 11 - 5).collect();
            let mut expected = v.clone();
            expected.sort();

            sort(&mut v);
            assert_eq!(v, expected, "len: {len}");
        }
    }

    #[test]
    fn two_elements() {
        let mut v = ["b", "a"];
        sort(&mut v);
        assert_eq!(v, ["a", "b"]);
    }

    #[test]
    fn stable_by_key() {
        let mut v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e'), (0, 'f'), (1, 'g')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            v,
            [(0, 'b'), (0, 'd'), (0, 'f'), (1, 'a'), (1, 'c'), (1, 'e'), (1, 'g')]
        );
    }
}
