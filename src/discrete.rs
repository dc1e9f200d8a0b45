//! Canonicalization for discrete domains.
//!
//! Over a continuous domain, `[0..3]` and `[4..9]` leave a gap. Over the
//! integers they do not, but a plain [`RangeSet`] cannot know that. This
//! module provides:
//!
//! - [`DiscreteDomain`]: a policy giving the successor and predecessor of a
//!   value, and rewriting any interval into the half-open form `[a..b)`.
//! - [`Integers`]: the policy for every primitive integer type.
//! - [`DiscreteRangeSet`]: a [`RangeSet`] that canonicalizes every interval
//!   argument before delegating, so intervals adjacent in the discrete sense
//!   share an endpoint and fuse.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{DiscreteRangeSet, Integers, Interval};
//!
//! let mut set = DiscreteRangeSet::with_domain(Integers);
//! set.add(Interval::closed(0, 3));
//! set.add(Interval::closed(4, 9));
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.to_string(), "{[0..10)}");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::bound::{LowerBound, UpperBound};
use crate::interval::Interval;
use crate::range_set::{RangeSet, RangeSetIterator};

/// A value domain where every value has a well-defined successor and
/// predecessor, except at the edges of the domain.
///
/// `next` and `previous` must be mutually inverse on adjacent values:
/// `next(v) == Some(w)` if and only if `previous(w) == Some(v)`.
pub trait DiscreteDomain<T: Ord + Clone> {
    /// Returns the smallest value greater than `value`, or `None` if `value`
    /// is the maximum of the domain.
    fn next(&self, value: &T) -> Option<T>;

    /// Returns the greatest value less than `value`, or `None` if `value` is
    /// the minimum of the domain.
    fn previous(&self, value: &T) -> Option<T>;

    /// Rewrites `interval` into the equivalent half-open form `[a..b)`.
    ///
    /// Unbounded sides stay unbounded. A closed lower bound at the domain
    /// minimum and a closed upper bound at the domain maximum become
    /// unbounded, since nothing lies beyond them. Returns `None` if the
    /// interval contains no value of the domain.
    ///
    /// ```rust
    /// use rangeset::{DiscreteDomain, Integers, Interval};
    ///
    /// assert_eq!(Integers.canonical(&Interval::closed(3, 9)), Some(Interval::closed_open(3, 10)));
    /// assert_eq!(Integers.canonical(&Interval::open(3, 9)), Some(Interval::closed_open(4, 9)));
    /// assert_eq!(Integers.canonical(&Interval::at_most(-2)), Some(Interval::less_than(-1)));
    /// assert_eq!(Integers.canonical(&Interval::at_most(i32::MAX)), Some(Interval::all()));
    /// assert_eq!(Integers.canonical(&Interval::open_closed(5, 5)), None);
    /// assert_eq!(Integers.canonical(&Interval::open(5, 6)), None);
    /// ```
    fn canonical(&self, interval: &Interval<T>) -> Option<Interval<T>> {
        let lower = match interval.lower() {
            LowerBound::Unbounded => LowerBound::Unbounded,
            LowerBound::Included(value) => match self.previous(value) {
                Some(_) => LowerBound::Included(value.clone()),
                None => LowerBound::Unbounded,
            },
            LowerBound::Excluded(value) => LowerBound::Included(self.next(value)?),
        };
        let upper = match interval.upper() {
            UpperBound::Unbounded => UpperBound::Unbounded,
            UpperBound::Included(value) => self
                .next(value)
                .map_or(UpperBound::Unbounded, UpperBound::Excluded),
            UpperBound::Excluded(value) => {
                self.previous(value)?;
                UpperBound::Excluded(value.clone())
            }
        };
        Some(Interval::new(lower, upper)).filter(|canonical| !canonical.is_empty())
    }
}

/// The discrete domain of the primitive integer types.
///
/// Successor and predecessor are checked: `i32::MAX` has no successor and
/// `i32::MIN` no predecessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integers;

macro_rules! impl_integer_domain {
    ($($integer:ty),* $(,)?) => {
        $(
            impl DiscreteDomain<$integer> for Integers {
                #[inline]
                fn next(&self, value: &$integer) -> Option<$integer> {
                    value.checked_add(1)
                }

                #[inline]
                fn previous(&self, value: &$integer) -> Option<$integer> {
                    value.checked_sub(1)
                }
            }
        )*
    };
}

impl_integer_domain!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A [`RangeSet`] over a discrete domain.
///
/// Every interval argument is rewritten by [`DiscreteDomain::canonical`]
/// before it reaches the wrapped set, so the stored intervals are always in
/// half-open form and discrete neighbours such as `..3]` and `[4..` fuse.
///
/// Two sets are equal only if both their intervals and their domains are
/// equal.
///
/// # Type Parameters
///
/// * `T` - The value type.
/// * `D` - The domain policy, for example [`Integers`].
#[derive(Clone)]
pub struct DiscreteRangeSet<T, D> {
    ranges: RangeSet<T>,
    domain: D,
}

/// A [`DiscreteRangeSet`] over the [`Integers`] domain.
pub type IntegerRangeSet<T> = DiscreteRangeSet<T, Integers>;

impl<T, D> DiscreteRangeSet<T, D> {
    /// Creates an empty set over `domain`.
    #[inline]
    #[must_use]
    pub fn with_domain(domain: D) -> Self {
        Self {
            ranges: RangeSet::new(),
            domain,
        }
    }

    /// Returns the domain policy.
    #[inline]
    pub const fn domain(&self) -> &D {
        &self.domain
    }

    /// Returns the wrapped set of canonical intervals.
    #[inline]
    pub const fn as_range_set(&self) -> &RangeSet<T> {
        &self.ranges
    }

    /// Unwraps the set of canonical intervals.
    #[inline]
    pub fn into_range_set(self) -> RangeSet<T> {
        self.ranges
    }

    /// Returns the number of stored intervals after consolidation.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the set contains no value.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns an iterator over the stored canonical intervals.
    #[inline]
    pub fn iter(&self) -> RangeSetIterator<'_, T> {
        self.ranges.iter()
    }
}

impl<T, D> DiscreteRangeSet<T, D>
where
    T: Ord + Clone,
    D: DiscreteDomain<T>,
{
    /// Wraps `base`, canonicalizing each of its intervals against `domain`.
    pub fn new(base: RangeSet<T>, domain: D) -> Self {
        let mut set = Self::with_domain(domain);
        set.add_all(base);
        set
    }

    /// Adds the canonical form of `interval`. See [`RangeSet::add`].
    pub fn add(&mut self, interval: Interval<T>) -> bool {
        match self.domain.canonical(&interval) {
            Some(canonical) => self.ranges.add(canonical),
            None => {
                trace!("ignoring interval without values in the domain");
                false
            }
        }
    }

    /// Removes the canonical form of `interval`. See [`RangeSet::remove`].
    pub fn remove(&mut self, interval: &Interval<T>) -> bool {
        match self.domain.canonical(interval) {
            Some(canonical) => self.ranges.remove(&canonical),
            None => {
                trace!("ignoring interval without values in the domain");
                false
            }
        }
    }

    /// Returns `true` if `value` lies within one of the stored intervals.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.ranges.contains(value)
    }

    /// Returns `true` if a single stored interval encloses the canonical form
    /// of `interval`. See [`RangeSet::contains_all`].
    pub fn contains_all(&self, interval: &Interval<T>) -> bool {
        self.domain
            .canonical(interval)
            .is_none_or(|canonical| self.ranges.contains_all(&canonical))
    }

    /// Adds the canonical form of every interval yielded by `intervals`.
    pub fn add_all<I>(&mut self, intervals: I) -> bool
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        intervals
            .into_iter()
            .fold(false, |changed, interval| self.add(interval) || changed)
    }

    /// Removes the canonical form of every interval of `other`.
    pub fn remove_all<'a, I>(&mut self, other: I) -> bool
    where
        I: IntoIterator<Item = &'a Interval<T>>,
        T: 'a,
    {
        other
            .into_iter()
            .fold(false, |changed, interval| self.remove(interval) || changed)
    }

    /// Returns the smallest interval enclosing every stored interval.
    #[inline]
    pub fn span(&self) -> Option<Interval<T>> {
        self.ranges.span()
    }
}

impl<T, D> DiscreteRangeSet<T, D>
where
    T: Ord + Clone,
    D: DiscreteDomain<T> + Clone,
{
    /// Returns the set of every domain value not contained in `self`.
    ///
    /// Built as the canonical universal interval minus every stored interval,
    /// both steps going through the canonicalizing `add` and `remove`.
    ///
    /// ```rust
    /// use rangeset::{IntegerRangeSet, Integers, Interval};
    ///
    /// let mut set = IntegerRangeSet::with_domain(Integers);
    /// set.add(Interval::closed(1, 5));
    /// assert_eq!(set.complement().to_string(), "{(-∞..1), [6..+∞)}");
    /// assert_eq!(set.complement().complement(), set);
    /// ```
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut complement = Self::with_domain(self.domain.clone());
        complement.add(Interval::all());
        complement.remove_all(self);
        complement
    }
}

impl<T, D: Default> Default for DiscreteRangeSet<T, D> {
    fn default() -> Self {
        Self::with_domain(D::default())
    }
}

impl<T, D> Extend<Interval<T>> for DiscreteRangeSet<T, D>
where
    T: Ord + Clone,
    D: DiscreteDomain<T>,
{
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, D> FromIterator<Interval<T>> for DiscreteRangeSet<T, D>
where
    T: Ord + Clone,
    D: DiscreteDomain<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add_all(iter);
        set
    }
}

impl<'a, T, D> IntoIterator for &'a DiscreteRangeSet<T, D> {
    type Item = &'a Interval<T>;
    type IntoIter = RangeSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, D: PartialEq> PartialEq for DiscreteRangeSet<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.ranges == other.ranges
    }
}

impl<T: Eq, D: Eq> Eq for DiscreteRangeSet<T, D> {}

impl<T: Hash, D: Hash> Hash for DiscreteRangeSet<T, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ranges.hash(state);
        self.domain.hash(state);
    }
}

impl<T: fmt::Debug, D: fmt::Debug> fmt::Debug for DiscreteRangeSet<T, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DiscreteRangeSet")
            .field("ranges", &self.ranges)
            .field("domain", &self.domain)
            .finish()
    }
}

impl<T: fmt::Display, D> fmt::Display for DiscreteRangeSet<T, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ranges, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, D> serde::Serialize for DiscreteRangeSet<T, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.ranges, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, D> serde::Deserialize<'de> for DiscreteRangeSet<T, D>
where
    T: serde::Deserialize<'de> + Ord + Clone,
    D: DiscreteDomain<T> + Default,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        let ranges: RangeSet<T> = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(ranges, D::default()))
    }
}

static_assertions::assert_impl_all!(IntegerRangeSet<i64>: Send, Sync, Clone, Default);

// =============================================================================
// Tests
// =============================================================================
