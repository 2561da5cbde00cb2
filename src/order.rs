//! Order predicates.
//!
//! All algorithms in this crate are written against `is_less(a, b)`, which returns `true` if `a`
//! must be placed strictly before `b`. The predicate has to describe a strict weak order for the
//! result to be sorted. Nothing here detects violations, the algorithms only guarantee that they
//! terminate and keep the original set of elements.

use std::cmp::Ordering;

/// `a` goes before `b` in ascending order.
#[inline]
pub fn ascending<T: Ord>(a: &T, b: &T) -> bool {
    a.lt(b)
}

/// `a` goes before `b` in descending order.
#[inline]
pub fn descending<T: Ord>(a: &T, b: &T) -> bool {
    b.lt(a)
}

/// Turns a three-way comparator into an `is_less` predicate.
#[inline]
pub fn by<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(a, b) == Ordering::Less
}

/// The same order, backwards.
#[inline]
pub fn reversed<T, F>(mut is_less: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    move |a: &T, b: &T| is_less(b, a)
}

/// Inclusive variant of `is_less`: `a` goes before `b` or they are equivalent.
#[inline]
pub fn or_equal<T, F>(mut is_less: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    move |a: &T, b: &T| !is_less(b, a)
}
