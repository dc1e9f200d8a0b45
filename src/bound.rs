//! Lower and upper interval bounds.
//!
//! A bound is either [`Unbounded`](LowerBound::Unbounded), or a value that is
//! [`Included`](LowerBound::Included) in or [`Excluded`](LowerBound::Excluded)
//! from the interval. Unbounded sides are an explicit variant rather than a
//! sentinel value, so `i32::MIN` is an ordinary endpoint.
//!
//! # Ordering
//!
//! Bounds of the same side form a total order. Values are compared first; for
//! equal values the bound that admits more is the more extreme one:
//!
//! | Side  | Order at the same value `v`            |
//! |-------|----------------------------------------|
//! | lower | `Included(v) < Excluded(v)`            |
//! | upper | `Excluded(v) < Included(v)`            |
//!
//! An unbounded lower bound is below every other lower bound, an unbounded
//! upper bound is above every other upper bound.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{LowerBound, UpperBound};
//!
//! assert!(LowerBound::Unbounded < LowerBound::Included(i32::MIN));
//! assert!(LowerBound::Included(3) < LowerBound::Excluded(3));
//! assert!(UpperBound::Excluded(3) < UpperBound::Included(3));
//! assert!(UpperBound::Included(i32::MAX) < UpperBound::Unbounded);
//! ```

use std::cmp::Ordering;
use std::ops::Bound;

/// The lower bound of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LowerBound<T> {
    /// No lower limit.
    Unbounded,
    /// The interval starts at this value, inclusive.
    Included(T),
    /// The interval starts just after this value.
    Excluded(T),
}

/// The upper bound of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpperBound<T> {
    /// No upper limit.
    Unbounded,
    /// The interval ends at this value, inclusive.
    Included(T),
    /// The interval ends just before this value.
    Excluded(T),
}

// =============================================================================
// Observers
// =============================================================================

impl<T> LowerBound<T> {
    /// Returns `true` if this side has no limit.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` if the endpoint itself belongs to the interval.
    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self, Self::Included(_))
    }

    /// Returns the endpoint value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Unbounded => None,
            Self::Included(value) | Self::Excluded(value) => Some(value),
        }
    }
}

impl<T> UpperBound<T> {
    /// Returns `true` if this side has no limit.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` if the endpoint itself belongs to the interval.
    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self, Self::Included(_))
    }

    /// Returns the endpoint value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Unbounded => None,
            Self::Included(value) | Self::Excluded(value) => Some(value),
        }
    }
}

impl<T: Ord> LowerBound<T> {
    /// Returns `true` if `value` lies on the admitted side of this bound.
    ///
    /// ```rust
    /// use rangeset::LowerBound;
    ///
    /// assert!(LowerBound::Included(3).admits(&3));
    /// assert!(!LowerBound::Excluded(3).admits(&3));
    /// assert!(LowerBound::Unbounded.admits(&i32::MIN));
    /// ```
    #[inline]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Included(bound) => bound <= value,
            Self::Excluded(bound) => bound < value,
        }
    }
}

impl<T: Ord> UpperBound<T> {
    /// Returns `true` if `value` lies on the admitted side of this bound.
    #[inline]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Included(bound) => value <= bound,
            Self::Excluded(bound) => value < bound,
        }
    }

    /// Returns `true` if no value is admitted both by this upper bound and by
    /// `lower`, i.e. an interval ending here lies entirely below an interval
    /// starting at `lower`.
    ///
    /// ```rust
    /// use rangeset::{LowerBound, UpperBound};
    ///
    /// assert!(UpperBound::Excluded(3).is_below(&LowerBound::Included(3)));
    /// assert!(!UpperBound::Included(3).is_below(&LowerBound::Included(3)));
    /// ```
    pub fn is_below(&self, lower: &LowerBound<T>) -> bool {
        match (self, lower) {
            (Self::Unbounded, _) | (_, LowerBound::Unbounded) => false,
            (Self::Included(upper), LowerBound::Included(lower)) => upper < lower,
            (Self::Included(upper), LowerBound::Excluded(lower))
            | (Self::Excluded(upper), LowerBound::Included(lower) | LowerBound::Excluded(lower)) => {
                upper <= lower
            }
        }
    }

    /// Returns `true` if an interval ending here and an interval starting at
    /// `lower` leave a gap between them.
    ///
    /// Touching bounds such as `..3)` and `[3..` or `..3]` and `(3..` leave no
    /// gap. `..3)` and `(3..` do: the value `3` is missing.
    pub fn is_separated_from(&self, lower: &LowerBound<T>) -> bool {
        match (self, lower) {
            (Self::Unbounded, _) | (_, LowerBound::Unbounded) => false,
            (Self::Excluded(upper), LowerBound::Excluded(lower)) => upper <= lower,
            (Self::Included(upper) | Self::Excluded(upper), LowerBound::Included(lower))
            | (Self::Included(upper), LowerBound::Excluded(lower)) => upper < lower,
        }
    }
}

// =============================================================================
// Complements
// =============================================================================

impl<T: Clone> LowerBound<T> {
    /// Returns the upper bound of the gap that ends where this bound starts.
    ///
    /// `[v..` becomes `..v)` and `(v..` becomes `..v]`. An unbounded lower
    /// bound leaves no room below it and yields `None`.
    #[inline]
    pub fn complement(&self) -> Option<UpperBound<T>> {
        match self {
            Self::Unbounded => None,
            Self::Included(value) => Some(UpperBound::Excluded(value.clone())),
            Self::Excluded(value) => Some(UpperBound::Included(value.clone())),
        }
    }
}

impl<T: Clone> UpperBound<T> {
    /// Returns the lower bound of the gap that starts where this bound ends.
    ///
    /// `..v]` becomes `(v..` and `..v)` becomes `[v..`. An unbounded upper
    /// bound yields `None`.
    #[inline]
    pub fn complement(&self) -> Option<LowerBound<T>> {
        match self {
            Self::Unbounded => None,
            Self::Included(value) => Some(LowerBound::Excluded(value.clone())),
            Self::Excluded(value) => Some(LowerBound::Included(value.clone())),
        }
    }
}

// =============================================================================
// Total Ordering
// =============================================================================

impl<T: Ord> PartialOrd for LowerBound<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for LowerBound<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
            (Self::Unbounded, _) => Ordering::Less,
            (_, Self::Unbounded) => Ordering::Greater,
            (Self::Included(left), Self::Included(right))
            | (Self::Excluded(left), Self::Excluded(right)) => left.cmp(right),
            (Self::Included(left), Self::Excluded(right)) => left.cmp(right).then(Ordering::Less),
            (Self::Excluded(left), Self::Included(right)) => {
                left.cmp(right).then(Ordering::Greater)
            }
        }
    }
}

impl<T: Ord> PartialOrd for UpperBound<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for UpperBound<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
            (Self::Unbounded, _) => Ordering::Greater,
            (_, Self::Unbounded) => Ordering::Less,
            (Self::Included(left), Self::Included(right))
            | (Self::Excluded(left), Self::Excluded(right)) => left.cmp(right),
            (Self::Included(left), Self::Excluded(right)) => {
                left.cmp(right).then(Ordering::Greater)
            }
            (Self::Excluded(left), Self::Included(right)) => left.cmp(right).then(Ordering::Less),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Bound<T>> for LowerBound<T> {
    fn from(bound: Bound<T>) -> Self {
        match bound {
            Bound::Unbounded => Self::Unbounded,
            Bound::Included(value) => Self::Included(value),
            Bound::Excluded(value) => Self::Excluded(value),
        }
    }
}

impl<T> From<Bound<T>> for UpperBound<T> {
    fn from(bound: Bound<T>) -> Self {
        match bound {
            Bound::Unbounded => Self::Unbounded,
            Bound::Included(value) => Self::Included(value),
            Bound::Excluded(value) => Self::Excluded(value),
        }
    }
}

impl<T> From<LowerBound<T>> for Bound<T> {
    fn from(bound: LowerBound<T>) -> Self {
        match bound {
            LowerBound::Unbounded => Self::Unbounded,
            LowerBound::Included(value) => Self::Included(value),
            LowerBound::Excluded(value) => Self::Excluded(value),
        }
    }
}

impl<T> From<UpperBound<T>> for Bound<T> {
    fn from(bound: UpperBound<T>) -> Self {
        match bound {
            UpperBound::Unbounded => Self::Unbounded,
            UpperBound::Included(value) => Self::Included(value),
            UpperBound::Excluded(value) => Self::Excluded(value),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
