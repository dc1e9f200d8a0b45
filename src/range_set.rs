//! Self-consolidating set of disjoint intervals.
//!
//! This module provides [`RangeSet`], a collection of values described as a
//! minimal sequence of intervals. Adding or removing an interval always
//! leaves the set consolidated:
//!
//! - no stored interval is empty,
//! - no two stored intervals overlap,
//! - no two stored intervals touch without a gap (they are fused instead),
//! - intervals are stored in strictly increasing order.
//!
//! Because of these invariants, equality of two sets is equality of their
//! interval sequences, and [`RangeSet::len`] counts merged intervals rather
//! than `add` calls.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity                   |
//! |----------------|------------------------------|
//! | `add`          | O(log n + k + shift)         |
//! | `remove`       | O(log n + k + shift)         |
//! | `contains`     | O(log n)                     |
//! | `contains_all` | O(log n)                     |
//! | `complement`   | O(n)                         |
//! | `len`          | O(1)                         |
//! | `iter`         | O(1) + O(n)                  |
//!
//! `k` is the number of stored intervals touched by the operation and
//! `shift` the number of trailing intervals moved in the backing storage.
//! Up to four intervals are stored inline without heap allocation.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{Interval, RangeSet};
//!
//! let mut set = RangeSet::new();
//! assert!(set.add(Interval::closed_open(0, 5)));
//! assert!(set.add(Interval::closed_open(10, 15)));
//! assert_eq!(set.len(), 2);
//!
//! // Touching intervals fuse
//! assert!(set.add(Interval::closed_open(5, 10)));
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.to_string(), "{[0..15)}");
//!
//! // Removing from the middle splits
//! assert!(set.remove(&Interval::closed(7, 8)));
//! assert_eq!(set.to_string(), "{[0..7), (8..15)}");
//! assert!(!set.contains(&7));
//!
//! // Complement
//! assert_eq!(
//!     set.complement().to_string(),
//!     "{(-∞..0), [7..8], [15..+∞)}"
//! );
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::bound::{LowerBound, UpperBound};
use crate::interval::Interval;
use crate::ordering::{compare_lower, compare_lower_biased, compare_upper};

/// The number of intervals stored inline before the storage spills to the heap.
const INLINE_CAPACITY: usize = 4;

type Storage<T> = SmallVec<[Interval<T>; INLINE_CAPACITY]>;

/// A set of values stored as a minimal sequence of disjoint intervals.
///
/// # Type Parameters
///
/// * `T` - The value type. Mutation and queries require `T: Ord + Clone`;
///   a type without a total order cannot be stored.
///
/// # Examples
///
/// ```rust
/// use rangeset::{Interval, RangeSet};
///
/// let set: RangeSet<i32> = [
///     Interval::closed(1, 3),
///     Interval::closed(2, 6),
///     Interval::greater_than(10),
/// ]
/// .into_iter()
/// .collect();
///
/// let intervals: Vec<_> = set.iter().cloned().collect();
/// assert_eq!(intervals, vec![Interval::closed(1, 6), Interval::greater_than(10)]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RangeSet<T> {
    intervals: Storage<T>,
}

impl<T> RangeSet<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: SmallVec::new(),
        }
    }

    /// Returns the number of stored intervals after consolidation.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no value.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns an iterator over the stored intervals in increasing order.
    #[inline]
    pub fn iter(&self) -> RangeSetIterator<'_, T> {
        RangeSetIterator {
            inner: self.intervals.iter(),
        }
    }

    /// Returns the stored intervals as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Removes every interval.
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }
}

impl<T: Ord> RangeSet<T> {
    /// Returns `true` if `value` lies within one of the stored intervals.
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeSet};
    ///
    /// let set = RangeSet::from(Interval::open(0, 10));
    /// assert!(set.contains(&5));
    /// assert!(!set.contains(&10));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.range_containing(value).is_some()
    }

    /// Returns the stored interval containing `value`, if any.
    pub fn range_containing(&self, value: &T) -> Option<&Interval<T>> {
        // Last interval starting at or before `value`.
        let index = self
            .intervals
            .partition_point(|stored| stored.lower().admits(value));
        index
            .checked_sub(1)
            .and_then(|index| self.intervals.get(index))
            .filter(|stored| stored.upper().admits(value))
    }

    /// Returns `true` if a single stored interval encloses `interval`.
    ///
    /// An interval straddling a gap is not contained, even if both of its
    /// endpoints are. The empty interval is always contained.
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeSet};
    ///
    /// let set: RangeSet<i32> = [Interval::closed(0, 3), Interval::closed(5, 9)]
    ///     .into_iter()
    ///     .collect();
    /// assert!(set.contains_all(&Interval::closed(6, 9)));
    /// assert!(!set.contains_all(&Interval::closed(2, 6)));
    /// assert!(set.contains_all(&Interval::open(4, 4)));
    /// ```
    pub fn contains_all(&self, interval: &Interval<T>) -> bool {
        if interval.is_empty() {
            return true;
        }
        let index = self
            .intervals
            .partition_point(|stored| compare_lower(stored, interval).is_le());
        index
            .checked_sub(1)
            .and_then(|index| self.intervals.get(index))
            .is_some_and(|stored| stored.encloses(interval))
    }

    /// Indices of the stored intervals overlapping or touching `interval`.
    fn connected_range(&self, interval: &Interval<T>) -> Range<usize> {
        let start = self
            .intervals
            .partition_point(|stored| stored.upper().is_separated_from(interval.lower()));
        let end = start
            + self.intervals[start..]
                .partition_point(|stored| !interval.upper().is_separated_from(stored.lower()));
        start..end
    }

    /// Indices of the stored intervals sharing at least one value with `interval`.
    fn overlapping_range(&self, interval: &Interval<T>) -> Range<usize> {
        let start = self
            .intervals
            .partition_point(|stored| stored.upper().is_below(interval.lower()));
        let end = start
            + self.intervals[start..]
                .partition_point(|stored| !interval.upper().is_below(stored.lower()));
        start..end
    }
}

impl<T: Ord + Clone> RangeSet<T> {
    /// Creates a set containing every value.
    #[must_use]
    pub fn all() -> Self {
        Self::from(Interval::all())
    }

    /// Adds `interval` to the set, fusing it with every stored interval it
    /// overlaps or touches.
    ///
    /// Returns `true` if the contents of the set changed. Adding an empty
    /// interval, or one already enclosed by a stored interval, returns
    /// `false`.
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeSet};
    ///
    /// let mut set = RangeSet::new();
    /// assert!(set.add(Interval::closed(0, 10)));
    /// assert!(!set.add(Interval::closed(2, 3)));
    /// assert!(!set.add(Interval::closed_open(20, 20)));
    /// assert!(set.add(Interval::open_closed(10, 12)));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, interval: Interval<T>) -> bool {
        if interval.is_empty() {
            return false;
        }

        let touched = self.connected_range(&interval);
        if touched.len() == 1 && self.intervals[touched.start].encloses(&interval) {
            trace!(intervals = self.len(), "interval already enclosed");
            return false;
        }

        if touched.is_empty() {
            self.intervals.insert(touched.start, interval);
        } else {
            let first = &self.intervals[touched.start];
            let last = &self.intervals[touched.end - 1];
            let lower = if compare_lower(first, &interval).is_lt() {
                first.lower().clone()
            } else {
                interval.lower().clone()
            };
            let upper = if compare_upper(last, &interval).is_gt() {
                last.upper().clone()
            } else {
                interval.upper().clone()
            };
            self.intervals[touched.start] = Interval::new(lower, upper);
            self.intervals.drain(touched.start + 1..touched.end);
        }

        trace!(
            touched = touched.len(),
            intervals = self.len(),
            "added interval"
        );
        self.debug_check_consolidated();
        true
    }

    /// Removes every value of `interval` from the set.
    ///
    /// Stored intervals overlapping `interval` are truncated, split in two,
    /// or dropped entirely. Returns `true` if at least one stored interval was
    /// affected.
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeSet};
    ///
    /// let mut set = RangeSet::all();
    /// assert!(set.remove(&Interval::singleton(1)));
    /// assert!(!set.remove(&Interval::singleton(1)));
    /// assert_eq!(set.to_string(), "{(-∞..1), (1..+∞)}");
    /// ```
    pub fn remove(&mut self, interval: &Interval<T>) -> bool {
        if interval.is_empty() {
            return false;
        }

        let touched = self.overlapping_range(interval);
        if touched.is_empty() {
            trace!(intervals = self.len(), "interval not present");
            return false;
        }

        let first = &self.intervals[touched.start];
        let last = &self.intervals[touched.end - 1];
        let below = interval
            .lower()
            .complement()
            .map(|upper| Interval::new(first.lower().clone(), upper))
            .filter(|piece| !piece.is_empty());
        let above = interval
            .upper()
            .complement()
            .map(|lower| Interval::new(lower, last.upper().clone()))
            .filter(|piece| !piece.is_empty());

        self.intervals.drain(touched.clone());
        self.intervals
            .insert_many(touched.start, below.into_iter().chain(above));

        trace!(
            touched = touched.len(),
            intervals = self.len(),
            "removed interval"
        );
        self.debug_check_consolidated();
        true
    }

    /// Adds every interval yielded by `intervals`.
    ///
    /// Returns `true` if any of the additions changed the set.
    pub fn add_all<I>(&mut self, intervals: I) -> bool
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        intervals
            .into_iter()
            .fold(false, |changed, interval| self.add(interval) || changed)
    }

    /// Removes every interval of `other` from the set.
    ///
    /// Returns `true` if any of the removals changed the set.
    pub fn remove_all(&mut self, other: &Self) -> bool {
        other
            .iter()
            .fold(false, |changed, interval| self.remove(interval) || changed)
    }

    /// Returns the set of every value not contained in `self`.
    ///
    /// The result consists of the gaps before the first, between
    /// consecutive, and after the last stored interval. The receiver is not
    /// modified.
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeSet};
    ///
    /// assert_eq!(RangeSet::<i32>::new().complement(), RangeSet::all());
    /// assert!(RangeSet::<i32>::all().complement().is_empty());
    ///
    /// let set = RangeSet::from(Interval::closed(1, 5));
    /// assert_eq!(set.complement().to_string(), "{(-∞..1), (5..+∞)}");
    /// ```
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut gaps = Storage::<T>::with_capacity(self.len() + 1);
        let mut gap_lower = Some(LowerBound::Unbounded);

        for stored in &self.intervals {
            if let (Some(lower), Some(upper)) = (gap_lower.take(), stored.lower().complement()) {
                gaps.push(Interval::new(lower, upper));
            }
            gap_lower = stored.upper().complement();
        }
        if let Some(lower) = gap_lower {
            gaps.push(Interval::new(lower, UpperBound::Unbounded));
        }

        debug!(
            intervals = self.len(),
            gaps = gaps.len(),
            "built complement"
        );
        let complement = Self { intervals: gaps };
        complement.debug_check_consolidated();
        complement
    }

    /// Returns the smallest interval enclosing every stored interval, or
    /// `None` if the set is empty.
    pub fn span(&self) -> Option<Interval<T>> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        Some(first.span(last))
    }

    #[inline]
    fn debug_check_consolidated(&self) {
        debug_assert!(
            is_consolidated(&self.intervals),
            "{}",
            CONSOLIDATED_INVARIANT_PANIC_MESSAGE
        );
    }
}

/// Returns the complement of `set`.
///
/// Equivalent to [`RangeSet::complement`].
pub fn complement<T: Ord + Clone>(set: &RangeSet<T>) -> RangeSet<T> {
    set.complement()
}

impl<T> Default for RangeSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> From<Interval<T>> for RangeSet<T> {
    fn from(interval: Interval<T>) -> Self {
        let mut set = Self::new();
        set.add(interval);
        set
    }
}

impl<T: Ord + Clone> FromIterator<Interval<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_all(iter);
        set
    }
}

impl<T: Ord + Clone> Extend<Interval<T>> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the intervals of a [`RangeSet`], in increasing
/// order.
pub struct RangeSetIterator<'a, T> {
    inner: std::slice::Iter<'a, Interval<T>>,
}

impl<'a, T> Iterator for RangeSetIterator<'a, T> {
    type Item = &'a Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RangeSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for RangeSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for RangeSetIterator<'_, T> {}

impl<T> Clone for RangeSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owning iterator over the intervals of a [`RangeSet`], in increasing order.
pub struct RangeSetIntoIterator<T> {
    inner: smallvec::IntoIter<[Interval<T>; INLINE_CAPACITY]>,
}

impl<T> Iterator for RangeSetIntoIterator<T> {
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RangeSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for RangeSetIntoIterator<T> {}

impl<T> FusedIterator for RangeSetIntoIterator<T> {}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = RangeSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RangeSet<T> {
    type Item = Interval<T>;
    type IntoIter = RangeSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RangeSetIntoIterator {
            inner: self.intervals.into_iter(),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for RangeSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RangeSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for interval in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{interval}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for RangeSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for interval in self {
            seq.serialize_element(interval)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct RangeSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> RangeSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for RangeSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    type Value = RangeSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of intervals")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Re-adding consolidates input that was not produced by `serialize`.
        let mut set = RangeSet::new();
        while let Some(interval) = seq.next_element()? {
            set.add(interval);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RangeSet<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RangeSetVisitor::new())
    }
}

static_assertions::assert_impl_all!(RangeSet<i32>: Send, Sync, Clone, Default);

/// Message constant for panic when a mutation leaves the set unconsolidated.
const CONSOLIDATED_INVARIANT_PANIC_MESSAGE: &str =
    "range set intervals must be non-empty, strictly increasing, and separated by gaps";

fn is_consolidated<T: Ord>(intervals: &[Interval<T>]) -> bool {
    intervals.iter().all(|interval| !interval.is_empty())
        && intervals.windows(2).all(|window| {
            compare_lower_biased(&window[0], &window[1]).is_lt()
                && window[0].upper().is_separated_from(window[1].lower())
        })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn set_of(intervals: impl IntoIterator<Item = Interval<i32>>) -> RangeSet<i32> {
        intervals.into_iter().collect()
    }

    #[rstest]
    fn test_new_creates_empty() {
        let set: RangeSet<i32> = RangeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&0));
    }

    #[rstest]
    fn test_inline_capacity_constant() {
        assert_eq!(INLINE_CAPACITY, 4);
    }

    #[rstest]
    fn test_small_sets_stay_inline() {
        let set = set_of((0..4).map(|index| Interval::closed(index * 10, index * 10 + 1)));
        assert_eq!(set.len(), 4);
        assert!(!set.intervals.spilled());
    }

    #[rstest]
    fn test_large_sets_spill_and_merge_back_inline_content() {
        let mut set = set_of((0..8).map(|index| Interval::closed(index * 10, index * 10 + 1)));
        assert!(set.intervals.spilled());
        assert!(set.add(Interval::closed(0, 100)));
        assert_eq!(set.as_slice(), &[Interval::closed(0, 100)]);
    }

    #[rstest]
    fn test_connected_range_includes_touching_neighbours() {
        let set = set_of([
            Interval::closed_open(3, 6),
            Interval::closed_open(7, 9),
            Interval::closed_open(14, 17),
            Interval::closed_open(20, 24),
        ]);
        assert_eq!(set.connected_range(&Interval::closed_open(9, 14)), 1..3);
        assert_eq!(set.overlapping_range(&Interval::closed_open(9, 14)), 2..2);
        assert_eq!(set.connected_range(&Interval::closed_open(25, 27)), 4..4);
        assert_eq!(set.connected_range(&Interval::closed_open(1, 2)), 0..0);
        assert_eq!(set.overlapping_range(&Interval::closed_open(8, 15)), 1..3);
    }

    #[rstest]
    #[case::fuses_overlap(
        vec![Interval::closed(0, 5), Interval::closed(3, 9)],
        vec![Interval::closed(0, 9)]
    )]
    #[case::fuses_touching_half_open(
        vec![Interval::closed_open(0, 5), Interval::closed(5, 9)],
        vec![Interval::closed(0, 9)]
    )]
    #[case::keeps_missing_point(
        vec![Interval::closed_open(0, 5), Interval::open(5, 9)],
        vec![Interval::closed_open(0, 5), Interval::open(5, 9)]
    )]
    #[case::bridges_many(
        vec![
            Interval::closed(0, 1),
            Interval::closed(3, 4),
            Interval::closed(6, 7),
            Interval::closed(-5, 10),
        ],
        vec![Interval::closed(-5, 10)]
    )]
    #[case::unbounded_wins(
        vec![Interval::closed(0, 1), Interval::at_most(0), Interval::greater_than(1)],
        vec![Interval::all()]
    )]
    #[case::ignores_empty(
        vec![Interval::closed(0, 1), Interval::open(4, 4), Interval::closed(9, 5)],
        vec![Interval::closed(0, 1)]
    )]
    fn test_add_consolidates(
        #[case] added: Vec<Interval<i32>>,
        #[case] expected: Vec<Interval<i32>>,
    ) {
        let set = set_of(added);
        assert_eq!(set.as_slice(), expected.as_slice());
        assert!(is_consolidated(set.as_slice()));
    }

    #[rstest]
    fn test_add_reports_change() {
        let mut set = RangeSet::new();
        assert!(set.add(Interval::closed(0, 10)));
        assert!(!set.add(Interval::closed(0, 10)));
        assert!(!set.add(Interval::open(0, 10)));
        assert!(set.add(Interval::closed(10, 11)));
        assert!(!set.add(Interval::closed_open(3, 3)));
    }

    #[rstest]
    #[case::hole(Interval::closed(4, 6), vec![Interval::closed_open(0, 4), Interval::open_closed(6, 10)])]
    #[case::truncate_left(Interval::at_most(4), vec![Interval::open_closed(4, 10)])]
    #[case::truncate_right(Interval::at_least(4), vec![Interval::closed_open(0, 4)])]
    #[case::consume(Interval::open(-1, 11), vec![])]
    #[case::endpoint_only(Interval::singleton(10), vec![Interval::closed_open(0, 10)])]
    fn test_remove_splits(#[case] removed: Interval<i32>, #[case] expected: Vec<Interval<i32>>) {
        let mut set = RangeSet::from(Interval::closed(0, 10));
        assert!(set.remove(&removed));
        assert_eq!(set.as_slice(), expected.as_slice());
    }

    #[rstest]
    fn test_remove_across_several_intervals() {
        let mut set = set_of([
            Interval::closed(0, 2),
            Interval::closed(4, 6),
            Interval::closed(8, 10),
        ]);
        assert!(set.remove(&Interval::open(1, 9)));
        assert_eq!(
            set.as_slice(),
            &[Interval::closed(0, 1), Interval::closed(9, 10)]
        );
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut set = set_of([Interval::closed(0, 2), Interval::closed(4, 6)]);
        let before = set.clone();
        assert!(!set.remove(&Interval::open(2, 4)));
        assert!(!set.remove(&Interval::closed_open(1, 1)));
        assert_eq!(set, before);
    }

    #[rstest]
    fn test_range_containing() {
        let set = set_of([Interval::closed(0, 2), Interval::greater_than(4)]);
        assert_eq!(set.range_containing(&1), Some(&Interval::closed(0, 2)));
        assert_eq!(set.range_containing(&3), None);
        assert_eq!(set.range_containing(&4), None);
        assert_eq!(set.range_containing(&i32::MAX), Some(&Interval::greater_than(4)));
        assert_eq!(set.range_containing(&-1), None);
    }

    #[rstest]
    fn test_contains_all_requires_single_interval() {
        let set = set_of([Interval::closed(0, 3), Interval::closed(5, 9)]);
        assert!(set.contains_all(&Interval::closed(0, 3)));
        assert!(set.contains_all(&Interval::open(5, 9)));
        assert!(!set.contains_all(&Interval::closed(3, 5)));
        assert!(!set.contains_all(&Interval::at_least(5)));
        assert!(RangeSet::<i32>::new().contains_all(&Interval::open(1, 1)));
        assert!(!RangeSet::<i32>::new().contains_all(&Interval::all()));
    }

    #[rstest]
    fn test_complement_gap_bounds_flip() {
        let set = set_of([Interval::closed_open(0, 3), Interval::open_closed(5, 9)]);
        let complement = set.complement();
        assert_eq!(
            complement.as_slice(),
            &[
                Interval::less_than(0),
                Interval::closed(3, 5),
                Interval::greater_than(9),
            ]
        );
        assert_eq!(complement.complement(), set);
    }

    #[rstest]
    fn test_complement_of_rays() {
        let set = set_of([Interval::at_most(0), Interval::at_least(10)]);
        assert_eq!(set.complement().as_slice(), &[Interval::open(0, 10)]);
    }

    #[rstest]
    fn test_add_all_and_remove_all() {
        let mut set = RangeSet::new();
        assert!(set.add_all([Interval::closed(0, 10), Interval::closed(20, 30)]));
        assert!(!set.add_all([Interval::closed(1, 2)]));

        let holes = set_of([Interval::closed(2, 3), Interval::closed(25, 40)]);
        assert!(set.remove_all(&holes));
        assert_eq!(
            set.as_slice(),
            &[
                Interval::closed_open(0, 2),
                Interval::open_closed(3, 10),
                Interval::closed_open(20, 25),
            ]
        );
    }

    #[rstest]
    fn test_span() {
        assert_eq!(RangeSet::<i32>::new().span(), None);
        let set = set_of([Interval::open(0, 3), Interval::at_least(10)]);
        assert_eq!(set.span(), Some(Interval::greater_than(0)));
    }

    #[rstest]
    fn test_iterators() {
        let set = set_of([Interval::closed(5, 6), Interval::closed(0, 1)]);
        let forward: Vec<_> = set.iter().cloned().collect();
        let backward: Vec<_> = set.iter().rev().cloned().collect();
        assert_eq!(forward, vec![Interval::closed(0, 1), Interval::closed(5, 6)]);
        assert_eq!(backward, vec![Interval::closed(5, 6), Interval::closed(0, 1)]);
        assert_eq!(set.iter().len(), 2);
        let owned: Vec<_> = set.into_iter().collect();
        assert_eq!(owned, forward);
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        let left = set_of([Interval::closed(0, 1), Interval::closed(5, 6)]);
        let right = set_of([Interval::closed(5, 6), Interval::closed(0, 1)]);
        assert_eq!(left, right);
        assert_ne!(left, set_of([Interval::closed(0, 1)]));
    }

    #[rstest]
    fn test_display_and_debug() {
        let set = set_of([Interval::less_than(-80), Interval::closed(0, 1)]);
        assert_eq!(format!("{set}"), "{(-∞..-80), [0..1]}");
        assert_eq!(format!("{set:?}"), "{(-∞..-80), [0..1]}");
        assert_eq!(format!("{}", RangeSet::<i32>::new()), "{}");
    }

    #[rstest]
    fn test_free_complement_matches_method() {
        let set = set_of([Interval::closed(0, 1)]);
        assert_eq!(complement(&set), set.complement());
    }

    fn hash_of(set: &RangeSet<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_hash_is_structural() {
        let forward = set_of([
            Interval::closed(0, 3),
            Interval::closed(10, 12),
            Interval::closed(2, 5),
        ]);
        let backward = set_of([
            Interval::closed(2, 5),
            Interval::closed(10, 12),
            Interval::closed(0, 3),
        ]);
        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));

        let split = set_of([Interval::closed(0, 5), Interval::open(10, 12)]);
        assert_ne!(hash_of(&forward), hash_of(&split));
    }
}
