//! # rangeset
//!
//! A set of values over an ordered domain, stored as a minimal sequence of
//! disjoint intervals.
//!
//! ## Overview
//!
//! - **Bounds**: [`LowerBound`] and [`UpperBound`], each unbounded, inclusive
//!   or exclusive
//! - **Intervals**: [`Interval`], with construction from Rust range syntax,
//!   a `Display` rendering such as `[3..9)` and parsing of the same form
//! - **Ordering**: four comparators over intervals in [`ordering`]
//! - **Range sets**: [`RangeSet`], which merges on `add`, splits on `remove`
//!   and answers membership queries by binary search
//! - **Discrete domains**: [`DiscreteRangeSet`], which canonicalizes every
//!   interval to `[a..b)` so discrete neighbours such as `..3]` and `[4..`
//!   fuse
//!
//! ## Feature Flags
//!
//! - `discrete`: Discrete domains and the canonicalizing adapter (default)
//! - `serde`: `Serialize` and `Deserialize` for bounds, intervals and sets
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rangeset::prelude::*;
//!
//! let mut set = RangeSet::new();
//! set.add(Interval::closed(1, 5));
//! set.add(Interval::closed(3, 9));
//! set.add(Interval::at_least(20));
//! assert_eq!(set.to_string(), "{[1..9], [20..+∞)}");
//!
//! set.remove(&Interval::open(4, 6));
//! assert!(set.contains(&4));
//! assert!(!set.contains(&5));
//! assert!(set.contains(&6));
//! assert_eq!(set.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rangeset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bound::{LowerBound, UpperBound};
    pub use crate::interval::Interval;
    pub use crate::range_set::RangeSet;

    #[cfg(feature = "discrete")]
    pub use crate::discrete::{DiscreteDomain, DiscreteRangeSet, IntegerRangeSet, Integers};
}

pub mod bound;
pub mod error;
pub mod interval;
pub mod ordering;
pub mod range_set;

#[cfg(feature = "discrete")]
pub mod discrete;

pub use bound::{LowerBound, UpperBound};
pub use error::ParseIntervalError;
pub use interval::Interval;
pub use range_set::{RangeSet, RangeSetIntoIterator, RangeSetIterator, complement};

#[cfg(feature = "discrete")]
pub use discrete::{DiscreteDomain, DiscreteRangeSet, IntegerRangeSet, Integers};
