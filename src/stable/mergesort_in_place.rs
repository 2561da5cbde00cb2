//! Merge sort without auxiliary buffers. Merges rotate elements into place, so the sort needs no
//! `Clone` bound but takes O(n^2) moves in the worst case.

use crate::merge::merging_in_place;

sort_impl!("mergesort_in_place_stable", mergesort_in_place);

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn mergesort_in_place<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let mid = len / 2;

    mergesort_in_place(&mut v[..mid], is_less);
    mergesort_in_place(&mut v[mid..], is_less);
    merging_in_place(v, 0, mid - 1, len - 1, is_less);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_clone_elements() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Token(u32);

        let mut v: Vec<Token> = [4, 1, 3, 1, 0].into_iter().map(Token).collect();
        sort(&mut v);
        assert_eq!(v, [Token(0), Token(1), Token(1), Token(3), Token(4)]);
    }

    #[test]
    fn stable_by_key() {
        let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }
}
