use std::{marker::PhantomData, num::ParseIntError, str::FromStr};

use serde::{de::Error, Deserialize, Serialize};

use crate::{util::Bounded, Range, Ranges};

impl<K> Serialize for Range<K, ()>
where
	K: Bounded + PartialEq + std::fmt::Display,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de, K> Deserialize<'de> for Range<K, ()>
where
	K: Bounded + Copy + FromStr<Err = ParseIntError>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<K>(PhantomData<K>);

		impl<'de, K> serde::de::Visitor<'de> for Visitor<K>
		where
			K: Bounded + Copy + FromStr<Err = ParseIntError>,
		{
			type Value = Range<K, ()>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a bare range")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
			where
				E: Error,
			{
				v.parse().map_err(E::custom)
			}
		}

		deserializer.deserialize_str(Visitor(PhantomData))
	}
}

impl<K> Serialize for Ranges<K, ()>
where
	K: Bounded + PartialEq + std::fmt::Display,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de, K> Deserialize<'de> for Ranges<K, ()>
where
	K: Bounded + Copy + FromStr<Err = ParseIntError>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<K>(PhantomData<K>);

		impl<'de, K> serde::de::Visitor<'de> for Visitor<K>
		where
			K: Bounded + Copy + FromStr<Err = ParseIntError>,
		{
			type Value = Ranges<K, ()>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a comma-separated list of bare ranges")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
			where
				E: Error,
			{
				v.parse().map_err(E::custom)
			}
		}

		deserializer.deserialize_str(Visitor(PhantomData))
	}
}

#[cfg(test)]
mod tests {
	use crate::{BareRange, BareRanges};

	#[test]
	fn range_as_json_string() {
		let range = BareRange::<i64>::up_to(10);

		let json = serde_json::to_string(&range).unwrap();
		assert_eq!(json, "\":10\"");

		let back: BareRange<i64> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, range);
	}

	#[test]
	fn ranges_as_json_string() {
		let ranges = BareRanges::from(vec![
			BareRange::<i64>::up_to(10),
			BareRange::bare(20, 30),
			BareRange::starting_at(40),
		]);

		let json = serde_json::to_string(&ranges).unwrap();
		assert_eq!(json, "\":10,20:30,40:\"");

		let back: BareRanges<i64> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, ranges);
	}

	#[test]
	fn bad_text_is_a_deserialize_error() {
		assert!(serde_json::from_str::<BareRange<i64>>("\"foo::bar\"").is_err());
		assert!(serde_json::from_str::<BareRanges<i64>>("\":10,foo\"").is_err());
	}
}
