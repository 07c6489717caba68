//! Text codec for bare ranges.
//!
//! A single bare range encodes as one of five shapes: `"min:max"`,
//! `"min:"`, `":max"`, `":"` or `"n"`, where an omitted bound stands for
//! the corresponding extreme of `K`. Lists join with commas. ASCII only,
//! no whitespace tolerance.

use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

use crate::{util::Bounded, Range, Ranges};

/// Error parsing a single bare range from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRangeError {
	/// The text does not match any recognized range shape.
	#[error("{0:?}: unknown format")]
	UnknownFormat(String),
	/// A non-empty bound is not a valid integer literal.
	#[error("{text:?}: parse int")]
	ParseInt {
		text: String,
		#[source]
		source: ParseIntError,
	},
}

/// Error parsing a comma-separated list of bare ranges. Carries the index
/// of the offending segment; no partial collection is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("segment {index}")]
pub struct ParseRangesError {
	pub index: usize,
	#[source]
	pub source: ParseRangeError,
}

fn parse_bound<K>(text: &str) -> Result<K, ParseRangeError>
where
	K: FromStr<Err = ParseIntError>,
{
	text.parse().map_err(|source| ParseRangeError::ParseInt {
		text: text.to_owned(),
		source,
	})
}

impl<K> std::fmt::Display for Range<K, ()>
where
	K: Bounded + PartialEq + std::fmt::Display,
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match (self.min == K::MIN, self.max == K::MAX) {
			(true, true) => write!(f, ":"),
			(true, false) => write!(f, ":{}", self.max),
			(false, true) => write!(f, "{}:", self.min),
			(false, false) if self.min == self.max => write!(f, "{}", self.min),
			(false, false) => write!(f, "{}:{}", self.min, self.max),
		}
	}
}

impl<K> FromStr for Range<K, ()>
where
	K: Bounded + Copy + FromStr<Err = ParseIntError>,
{
	type Err = ParseRangeError;

	fn from_str(s: &str) -> Result<Self, ParseRangeError> {
		match s.split_once(':') {
			None => {
				let point = parse_bound(s)?;
				Ok(Range::singleton(point))
			}
			Some((_, right)) if right.contains(':') => {
				Err(ParseRangeError::UnknownFormat(s.to_owned()))
			}
			Some((left, right)) => {
				let min = if left.is_empty() {
					K::MIN
				} else {
					parse_bound(left)?
				};

				let max = if right.is_empty() {
					K::MAX
				} else {
					parse_bound(right)?
				};

				Ok(Range::bare(min, max))
			}
		}
	}
}

impl<K> std::fmt::Display for Ranges<K, ()>
where
	K: Bounded + PartialEq + std::fmt::Display,
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for (i, range) in self.iter().enumerate() {
			if i > 0 {
				write!(f, ",")?;
			}

			write!(f, "{}", range)?;
		}

		Ok(())
	}
}

impl<K> FromStr for Ranges<K, ()>
where
	K: Bounded + Copy + FromStr<Err = ParseIntError>,
{
	type Err = ParseRangesError;

	fn from_str(s: &str) -> Result<Self, ParseRangesError> {
		if s.is_empty() {
			return Ok(Ranges::new());
		}

		s.split(',')
			.enumerate()
			.map(|(index, segment)| {
				segment
					.parse()
					.map_err(|source| ParseRangesError { index, source })
			})
			.collect()
	}
}
