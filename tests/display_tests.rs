//! Integration tests for Display and `FromStr` implementations.
//!
//! Intervals render as `[lower..upper)` with `-∞` and `+∞` for missing
//! bounds, and sets as a brace-delimited list. Every rendering of an
//! interval parses back to the same interval.

use rangeset::{Interval, ParseIntervalError, RangeSet};
use rstest::rstest;

// =============================================================================
// Interval Display Tests
// =============================================================================

#[rstest]
#[case(Interval::closed(3, 9), "[3..9]")]
#[case(Interval::open(3, 9), "(3..9)")]
#[case(Interval::closed_open(-3, 9), "[-3..9)")]
#[case(Interval::at_least(3), "[3..+∞)")]
#[case(Interval::less_than(-9), "(-∞..-9)")]
#[case(Interval::all(), "(-∞..+∞)")]
fn test_interval_display_roundtrip(#[case] interval: Interval<i32>, #[case] expected: &str) {
    assert_eq!(format!("{interval}"), expected);
    assert_eq!(expected.parse::<Interval<i32>>(), Ok(interval));
}

#[rstest]
fn test_interval_debug_uses_debug_endpoints() {
    let interval = Interval::closed("a", "b");
    assert_eq!(format!("{interval:?}"), r#"["a".."b"]"#);
}

// =============================================================================
// Parse Error Tests
// =============================================================================

#[rstest]
#[case::empty("  ", ParseIntervalError::Empty)]
#[case::no_opening("3..9]", ParseIntervalError::MissingOpeningBracket)]
#[case::no_closing("[3..9", ParseIntervalError::MissingClosingBracket)]
#[case::no_separator("[3,9]", ParseIntervalError::MissingSeparator)]
fn test_interval_parse_errors(#[case] input: &str, #[case] expected: ParseIntervalError) {
    assert_eq!(input.parse::<Interval<i32>>(), Err(expected));
}

#[rstest]
fn test_interval_parse_invalid_endpoint() {
    let error = "[3..nine]".parse::<Interval<i32>>().unwrap_err();
    assert!(matches!(
        error,
        ParseIntervalError::InvalidEndpoint { ref endpoint, .. } if endpoint == "nine"
    ));
}

// =============================================================================
// RangeSet Display Tests
// =============================================================================

#[rstest]
fn test_range_set_display() {
    let set: RangeSet<i32> = [Interval::at_most(-1), Interval::closed_open(4, 6)]
        .into_iter()
        .collect();
    assert_eq!(format!("{set}"), "{(-∞..-1], [4..6)}");
    assert_eq!(format!("{set:?}"), "{(-∞..-1], [4..6)}");
}

#[cfg(feature = "discrete")]
#[rstest]
fn test_discrete_range_set_display() {
    use rangeset::IntegerRangeSet;

    let set: IntegerRangeSet<i32> = [Interval::at_most(-1), Interval::closed(4, 6)]
        .into_iter()
        .collect();
    assert_eq!(format!("{set}"), "{(-∞..0), [4..7)}");
}
