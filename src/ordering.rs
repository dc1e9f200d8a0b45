//! Comparators over intervals.
//!
//! Four stateless total orders, each looking at one side of the intervals and
//! optionally using the other side as a tiebreaker. They never fail and never
//! inspect anything but the bounds, so they can be handed to any sort or
//! binary search:
//!
//! | Function               | Primary key | Tiebreaker |
//! |------------------------|-------------|------------|
//! | [`compare_lower`]        | lower bound | none       |
//! | [`compare_upper`]        | upper bound | none       |
//! | [`compare_lower_biased`] | lower bound | upper bound |
//! | [`compare_upper_biased`] | upper bound | lower bound |
//!
//! A missing lower bound sorts before every present one, a missing upper
//! bound after every present one. Present bounds use the bound ordering
//! described in [`crate::bound`].
//!
//! # Examples
//!
//! ```rust
//! use rangeset::Interval;
//! use rangeset::ordering::{compare_lower_biased, compare_upper};
//! use std::cmp::Ordering;
//!
//! let mut intervals = vec![
//!     Interval::closed(5, 9),
//!     Interval::at_most(3),
//!     Interval::closed(5, 6),
//! ];
//! intervals.sort_by(compare_lower_biased);
//! assert_eq!(
//!     intervals,
//!     vec![Interval::at_most(3), Interval::closed(5, 6), Interval::closed(5, 9)]
//! );
//!
//! assert_eq!(
//!     compare_upper(&Interval::at_least(0), &Interval::closed(0, 100)),
//!     Ordering::Greater
//! );
//! ```

use std::cmp::Ordering;

use crate::interval::Interval;

/// Compares the lower bounds only.
#[inline]
pub fn compare_lower<T: Ord>(left: &Interval<T>, right: &Interval<T>) -> Ordering {
    left.lower().cmp(right.lower())
}

/// Compares the upper bounds only.
#[inline]
pub fn compare_upper<T: Ord>(left: &Interval<T>, right: &Interval<T>) -> Ordering {
    left.upper().cmp(right.upper())
}

/// Compares the lower bounds, breaking ties with the upper bounds.
#[inline]
pub fn compare_lower_biased<T: Ord>(left: &Interval<T>, right: &Interval<T>) -> Ordering {
    compare_lower(left, right).then_with(|| compare_upper(left, right))
}

/// Compares the upper bounds, breaking ties with the lower bounds.
#[inline]
pub fn compare_upper_biased<T: Ord>(left: &Interval<T>, right: &Interval<T>) -> Ordering {
    compare_upper(left, right).then_with(|| compare_lower(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_lower_first(Interval::at_most(0), Interval::closed(-5, 0), Ordering::Less)]
    #[case::both_missing(Interval::at_most(0), Interval::less_than(9), Ordering::Equal)]
    #[case::ignores_upper(Interval::closed(1, 9), Interval::closed(1, 2), Ordering::Equal)]
    #[case::inclusive_first(Interval::closed(1, 2), Interval::open(1, 2), Ordering::Less)]
    fn test_compare_lower(
        #[case] left: Interval<i32>,
        #[case] right: Interval<i32>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_lower(&left, &right), expected);
        assert_eq!(compare_lower(&right, &left), expected.reverse());
    }

    #[rstest]
    #[case::missing_upper_last(Interval::at_least(0), Interval::closed(0, 100), Ordering::Greater)]
    #[case::both_missing(Interval::at_least(0), Interval::greater_than(9), Ordering::Equal)]
    #[case::ignores_lower(Interval::closed(-9, 2), Interval::closed(1, 2), Ordering::Equal)]
    fn test_compare_upper(
        #[case] left: Interval<i32>,
        #[case] right: Interval<i32>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_upper(&left, &right), expected);
        assert_eq!(compare_upper(&right, &left), expected.reverse());
    }

    #[rstest]
    fn test_biased_comparators_break_ties() {
        let short = Interval::closed(1, 2);
        let long = Interval::closed(1, 9);
        assert_eq!(compare_lower_biased(&short, &long), Ordering::Less);

        let early = Interval::closed(-9, 2);
        let late = Interval::closed(1, 2);
        assert_eq!(compare_upper_biased(&early, &late), Ordering::Less);
        assert_eq!(compare_upper_biased(&late, &late), Ordering::Equal);
    }
}
