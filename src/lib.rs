//! Classical comparison sorts built around a shared predicate interface.
//!
//! Every driver module exposes `sort`, `sort_descending`, `sort_by` and their `sort_range*`
//! counterparts, plus a `SortImpl` type implementing [`sort_test_tools::Sort`].

use std::ops::{Bound, Range, RangeBounds};

macro_rules! sort_impl {
    ($name:expr, $driver:ident $(, $bound:ident)?) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_descending<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort_descending(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> core::cmp::Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_range_by<T, F>(arr: &mut [T], range: core::ops::Range<usize>, compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> core::cmp::Ordering,
            {
                sort_range_by(arr, range, compare);
            }
        }

        /// Sorts `v` in ascending order.
        #[inline]
        pub fn sort<T>(v: &mut [T])
        where
            T: Ord $(+ $bound)?,
        {
            $driver(v, &mut $crate::order::ascending::<T>);
        }

        /// Sorts `v` in descending order.
        #[inline]
        pub fn sort_descending<T>(v: &mut [T])
        where
            T: Ord $(+ $bound)?,
        {
            $driver(v, &mut $crate::order::descending::<T>);
        }

        /// Sorts `v` with the comparator function `compare`.
        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], compare: F)
        where
            $(T: $bound,)?
            F: FnMut(&T, &T) -> core::cmp::Ordering,
        {
            $driver(v, &mut $crate::order::by(compare));
        }

        /// Sorts `v[range]` in ascending order, leaving everything outside the range untouched.
        #[inline]
        pub fn sort_range<T, R>(v: &mut [T], range: R)
        where
            T: Ord $(+ $bound)?,
            R: core::ops::RangeBounds<usize>,
        {
            if let Some(v) = $crate::sub_slice(v, range) {
                $driver(v, &mut $crate::order::ascending::<T>);
            }
        }

        /// Sorts `v[range]` in descending order, leaving everything outside the range untouched.
        #[inline]
        pub fn sort_range_descending<T, R>(v: &mut [T], range: R)
        where
            T: Ord $(+ $bound)?,
            R: core::ops::RangeBounds<usize>,
        {
            if let Some(v) = $crate::sub_slice(v, range) {
                $driver(v, &mut $crate::order::descending::<T>);
            }
        }

        /// Sorts `v[range]` with the comparator function `compare`.
        #[inline]
        pub fn sort_range_by<T, R, F>(v: &mut [T], range: R, compare: F)
        where
            $(T: $bound,)?
            R: core::ops::RangeBounds<usize>,
            F: FnMut(&T, &T) -> core::cmp::Ordering,
        {
            if let Some(v) = $crate::sub_slice(v, range) {
                $driver(v, &mut $crate::order::by(compare));
            }
        }
    };
}

pub mod insertion;
pub mod merge;
pub mod order;
pub mod partition;
pub mod stable;
pub mod unstable;

/// Resolves `range` against `v`. An inverted range yields `None`, an out-of-bounds range
/// panics like regular slice indexing does.
pub(crate) fn sub_slice<T, R>(v: &mut [T], range: R) -> Option<&mut [T]>
where
    R: RangeBounds<usize>,
{
    let range = resolve_range(v.len(), range)?;
    Some(&mut v[range])
}

/// Turns `range` into a half-open range over a sequence of length `len`. Inverted ranges yield
/// `None`. The end is not checked against `len`, indexing with the result does that.
pub(crate) fn resolve_range<R>(len: usize, range: R) -> Option<Range<usize>>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        return None;
    }

    Some(start..end)
}
