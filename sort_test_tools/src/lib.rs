/// Uniform access to a sort implementation, used by the shared test suite.
///
/// The element bounds include `Clone` because several of the merge based implementations copy
/// elements into scratch memory.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_descending<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    fn sort_range_by<T, F>(arr: &mut [T], range: std::ops::Range<usize>, compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
