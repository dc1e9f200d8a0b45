//! Intervals over an ordered value domain.
//!
//! An [`Interval`] is a pair of a [`LowerBound`] and an [`UpperBound`]. Each
//! side is open, closed, or unbounded, so `Interval` covers every shape of
//! contiguous span: `[a..b]`, `(a..b)`, `[a..+∞)`, `(-∞..b]`, `(-∞..+∞)` and
//! so on.
//!
//! An interval whose bounds admit no value, such as `[5..5)` or `[7..3]`, is
//! *empty*. Empty intervals are valid values; range sets treat them as inert.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::Interval;
//!
//! let interval = Interval::closed_open(3, 9);
//! assert!(interval.contains(&3));
//! assert!(!interval.contains(&9));
//! assert_eq!(interval.to_string(), "[3..9)");
//!
//! let parsed: Interval<i32> = "[3..9)".parse().unwrap();
//! assert_eq!(parsed, interval);
//!
//! assert!(Interval::open(5, 5).is_empty());
//! assert!(Interval::<i32>::all().encloses(&Interval::at_most(0)));
//! ```

use std::fmt;
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};
use std::str::FromStr;

use crate::bound::{LowerBound, UpperBound};
use crate::error::ParseIntervalError;

/// A contiguous span of an ordered domain.
///
/// # Type Parameters
///
/// * `T` - The value type. Most operations require `T: Ord`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    lower: LowerBound<T>,
    upper: UpperBound<T>,
}

// =============================================================================
// Construction
// =============================================================================

impl<T> Interval<T> {
    /// Creates an interval from its two bounds.
    ///
    /// No validation is done: bounds that admit no value produce an empty
    /// interval.
    #[inline]
    pub const fn new(lower: LowerBound<T>, upper: UpperBound<T>) -> Self {
        Self { lower, upper }
    }

    /// `[lower..upper]`
    #[inline]
    pub const fn closed(lower: T, upper: T) -> Self {
        Self::new(LowerBound::Included(lower), UpperBound::Included(upper))
    }

    /// `(lower..upper)`
    #[inline]
    pub const fn open(lower: T, upper: T) -> Self {
        Self::new(LowerBound::Excluded(lower), UpperBound::Excluded(upper))
    }

    /// `[lower..upper)`
    #[inline]
    pub const fn closed_open(lower: T, upper: T) -> Self {
        Self::new(LowerBound::Included(lower), UpperBound::Excluded(upper))
    }

    /// `(lower..upper]`
    #[inline]
    pub const fn open_closed(lower: T, upper: T) -> Self {
        Self::new(LowerBound::Excluded(lower), UpperBound::Included(upper))
    }

    /// `[lower..+∞)`
    #[inline]
    pub const fn at_least(lower: T) -> Self {
        Self::new(LowerBound::Included(lower), UpperBound::Unbounded)
    }

    /// `(lower..+∞)`
    #[inline]
    pub const fn greater_than(lower: T) -> Self {
        Self::new(LowerBound::Excluded(lower), UpperBound::Unbounded)
    }

    /// `(-∞..upper]`
    #[inline]
    pub const fn at_most(upper: T) -> Self {
        Self::new(LowerBound::Unbounded, UpperBound::Included(upper))
    }

    /// `(-∞..upper)`
    #[inline]
    pub const fn less_than(upper: T) -> Self {
        Self::new(LowerBound::Unbounded, UpperBound::Excluded(upper))
    }

    /// The universal interval `(-∞..+∞)`.
    #[inline]
    pub const fn all() -> Self {
        Self::new(LowerBound::Unbounded, UpperBound::Unbounded)
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn lower(&self) -> &LowerBound<T> {
        &self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper(&self) -> &UpperBound<T> {
        &self.upper
    }

    /// Splits the interval into its bounds.
    #[inline]
    pub fn into_bounds(self) -> (LowerBound<T>, UpperBound<T>) {
        (self.lower, self.upper)
    }

    /// Returns `true` if neither side is bounded.
    #[inline]
    pub const fn is_all(&self) -> bool {
        self.lower.is_unbounded() && self.upper.is_unbounded()
    }
}

impl<T: Clone> Interval<T> {
    /// `[value..value]`
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self::closed(value.clone(), value)
    }

    /// Builds an interval from anything implementing [`RangeBounds`].
    ///
    /// ```rust
    /// use rangeset::Interval;
    ///
    /// assert_eq!(Interval::from_range_bounds(&(1..=4)), Interval::closed(1, 4));
    /// assert_eq!(Interval::from_range_bounds(&(..4)), Interval::less_than(4));
    /// ```
    pub fn from_range_bounds<R: RangeBounds<T> + ?Sized>(range: &R) -> Self {
        Self::new(
            range.start_bound().cloned().into(),
            range.end_bound().cloned().into(),
        )
    }
}

// =============================================================================
// Queries
// =============================================================================

impl<T: Ord> Interval<T> {
    /// Returns `true` if no value lies within the interval.
    ///
    /// ```rust
    /// use rangeset::Interval;
    ///
    /// assert!(Interval::closed_open(5, 5).is_empty());
    /// assert!(Interval::open_closed(5, 5).is_empty());
    /// assert!(Interval::closed(7, 3).is_empty());
    /// assert!(!Interval::closed(5, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.upper.is_below(&self.lower)
    }

    /// Returns `true` if `value` lies within the interval.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.lower.admits(value) && self.upper.admits(value)
    }

    /// Returns `true` if every value of `other` lies within `self`.
    ///
    /// Every interval encloses the empty interval.
    pub fn encloses(&self, other: &Self) -> bool {
        other.is_empty() || (self.lower <= other.lower && other.upper <= self.upper)
    }

    /// Returns `true` if the two intervals share at least one value.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && !self.upper.is_below(&other.lower)
            && !other.upper.is_below(&self.lower)
    }

    /// Returns `true` if the two intervals overlap or touch without a gap,
    /// meaning their union is a single interval.
    ///
    /// ```rust
    /// use rangeset::Interval;
    ///
    /// assert!(Interval::closed_open(0, 3).is_connected(&Interval::closed(3, 5)));
    /// assert!(!Interval::closed_open(0, 3).is_connected(&Interval::open(3, 5)));
    /// assert!(!Interval::closed(0, 3).is_connected(&Interval::closed(4, 5)));
    /// ```
    pub fn is_connected(&self, other: &Self) -> bool {
        !self.upper.is_separated_from(&other.lower) && !other.upper.is_separated_from(&self.lower)
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Returns the smallest interval enclosing both `self` and `other`.
    pub fn span(&self, other: &Self) -> Self {
        Self::new(
            std::cmp::min(&self.lower, &other.lower).clone(),
            std::cmp::max(&self.upper, &other.upper).clone(),
        )
    }
}

// =============================================================================
// std::ops interop
// =============================================================================

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        match &self.lower {
            LowerBound::Unbounded => Bound::Unbounded,
            LowerBound::Included(value) => Bound::Included(value),
            LowerBound::Excluded(value) => Bound::Excluded(value),
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        match &self.upper {
            UpperBound::Unbounded => Bound::Unbounded,
            UpperBound::Included(value) => Bound::Included(value),
            UpperBound::Excluded(value) => Bound::Excluded(value),
        }
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(range: Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Self::all()
    }
}

// =============================================================================
// Formatting
// =============================================================================

const NEGATIVE_INFINITY: &str = "-∞";
const POSITIVE_INFINITY: &str = "+∞";
const SEPARATOR: &str = "..";

fn write_interval<T>(
    interval: &Interval<T>,
    formatter: &mut fmt::Formatter<'_>,
    mut endpoint: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    match &interval.lower {
        LowerBound::Unbounded => write!(formatter, "({NEGATIVE_INFINITY}")?,
        LowerBound::Included(value) => {
            write!(formatter, "[")?;
            endpoint(value, formatter)?;
        }
        LowerBound::Excluded(value) => {
            write!(formatter, "(")?;
            endpoint(value, formatter)?;
        }
    }
    write!(formatter, "{SEPARATOR}")?;
    match &interval.upper {
        UpperBound::Unbounded => write!(formatter, "{POSITIVE_INFINITY})"),
        UpperBound::Included(value) => {
            endpoint(value, formatter)?;
            write!(formatter, "]")
        }
        UpperBound::Excluded(value) => {
            endpoint(value, formatter)?;
            write!(formatter, ")")
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(self, formatter, |value, formatter| {
            fmt::Display::fmt(value, formatter)
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(self, formatter, |value, formatter| {
            fmt::Debug::fmt(value, formatter)
        })
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_endpoint<T>(text: &str) -> Result<T, ParseIntervalError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    text.parse().map_err(|error: T::Err| ParseIntervalError::InvalidEndpoint {
        endpoint: text.to_string(),
        reason: error.to_string(),
    })
}

fn infinite_endpoint_error(endpoint: &str) -> ParseIntervalError {
    ParseIntervalError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: "an infinite endpoint requires an open bracket".to_string(),
    }
}

/// Parses the `Display` rendering of an interval.
///
/// Accepted forms are `[a..b]`, `[a..b)`, `(a..b]`, `(a..b)`, with `-∞` as an
/// open lower endpoint and `+∞` (or `∞`) as an open upper endpoint.
/// Whitespace around the endpoints is ignored.
impl<T> FromStr for Interval<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseIntervalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseIntervalError::Empty);
        }

        let (lower_inclusive, rest) = if let Some(rest) = text.strip_prefix('[') {
            (true, rest)
        } else if let Some(rest) = text.strip_prefix('(') {
            (false, rest)
        } else {
            return Err(ParseIntervalError::MissingOpeningBracket);
        };

        let (upper_inclusive, body) = if let Some(body) = rest.strip_suffix(']') {
            (true, body)
        } else if let Some(body) = rest.strip_suffix(')') {
            (false, body)
        } else {
            return Err(ParseIntervalError::MissingClosingBracket);
        };

        let (lower_text, upper_text) = body
            .split_once(SEPARATOR)
            .ok_or(ParseIntervalError::MissingSeparator)?;
        let (lower_text, upper_text) = (lower_text.trim(), upper_text.trim());

        let lower = match (lower_text, lower_inclusive) {
            (NEGATIVE_INFINITY, false) => LowerBound::Unbounded,
            (NEGATIVE_INFINITY, true) => return Err(infinite_endpoint_error(lower_text)),
            (_, true) => LowerBound::Included(parse_endpoint(lower_text)?),
            (_, false) => LowerBound::Excluded(parse_endpoint(lower_text)?),
        };

        let upper = match (upper_text, upper_inclusive) {
            (POSITIVE_INFINITY | "∞", false) => UpperBound::Unbounded,
            (POSITIVE_INFINITY | "∞", true) => return Err(infinite_endpoint_error(upper_text)),
            (_, true) => UpperBound::Included(parse_endpoint(upper_text)?),
            (_, false) => UpperBound::Excluded(parse_endpoint(upper_text)?),
        };

        Ok(Self::new(lower, upper))
    }
}

// =============================================================================
// Tests
// =============================================================================
