//! A *range map* built on a plain sorted vector: a flat collection of
//! inclusive `[min, max]` integer ranges, each referencing a value of any
//! type, with binary-search point lookup and a compact reversible text
//! encoding for bounds-only ("bare") ranges.
//!
//! Unlike a self-balancing structure, a [`Ranges<K, V>`] is just a vector:
//! build it in any order, [`sort`](Ranges::sort) it once, then run as many
//! [`search`](Ranges::search) containment queries as needed.
//!
//! ```
//! use vec_range_map::{Range, Ranges};
//!
//! let mut ranges = Ranges::from(vec![
//! 	Range::new(4, 4, "cat"),
//! 	Range::new(1, 2, "dog"),
//! ]);
//!
//! ranges.sort();
//! assert_eq!(ranges.search(0), None);
//! assert_eq!(ranges.search(1), Some(&"dog"));
//! assert_eq!(ranges.search(2), Some(&"dog"));
//! assert_eq!(ranges.search(3), None);
//! assert_eq!(ranges.search(4), Some(&"cat"));
//! ```
//!
//! ## Bare ranges
//!
//! A [`BareRange<K>`] carries no value, only bounds. It round-trips through
//! a compact text form where the integer type's extreme values stand for
//! "unbounded" in that direction:
//!
//! ```
//! use vec_range_map::BareRange;
//!
//! assert_eq!(BareRange::<i64>::up_to(10).to_string(), ":10");
//! assert_eq!(BareRange::<i64>::bare(20, 30).to_string(), "20:30");
//! assert_eq!(BareRange::<i64>::starting_at(40).to_string(), "40:");
//! assert_eq!(BareRange::<i64>::singleton(50).to_string(), "50");
//! assert_eq!(BareRange::<i64>::all().to_string(), ":");
//! ```
//!
//! Lists of bare ranges join with commas and parse back, failing fast on the
//! first malformed segment:
//!
//! ```
//! use vec_range_map::BareRanges;
//!
//! let ranges: BareRanges<i64> = ":10,20:30,40:,50,:".parse()?;
//! assert_eq!(ranges.len(), 5);
//! assert_eq!(ranges.to_string(), ":10,20:30,40:,50,:");
//! # Ok::<_, vec_range_map::ParseRangesError>(())
//! ```
//!
//! Because the sentinels are ordinary values of `K`, a finite bound that
//! happens to equal `K::MIN` or `K::MAX` is indistinguishable from an open
//! bound. This is inherent to the encoding and deliberately not papered
//! over.
mod fmt;
mod range;
mod ranges;
pub mod util;

#[cfg(feature = "log")]
pub mod log;
#[cfg(feature = "net")]
pub mod net;
#[cfg(feature = "serde")]
mod serde;

pub use fmt::{ParseRangeError, ParseRangesError};
pub use range::Range;
pub use ranges::Ranges;

/// A range whose value carries no meaning: only the bounds do.
pub type BareRange<K> = Range<K, ()>;

/// A collection of bare ranges.
pub type BareRanges<K> = Ranges<K, ()>;
