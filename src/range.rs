use crate::util::Bounded;

/// A min/max range (inclusive) of integers referencing a value of any type.
///
/// Nothing enforces `min <= max`: an inverted range is constructible and
/// simply contains no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<K, V> {
	pub min: K,
	pub max: K,
	pub value: V,
}

impl<K, V> Range<K, V> {
	pub const fn new(min: K, max: K, value: V) -> Range<K, V> {
		Range { min, max, value }
	}

	/// Whether `point` falls within `[min, max]`. Both bounds are inclusive.
	pub fn contains(&self, point: K) -> bool
	where
		K: PartialOrd + Copy,
	{
		self.min <= point && point <= self.max
	}
}

impl<K> Range<K, ()> {
	/// A bare range over `[min, max]`.
	pub const fn bare(min: K, max: K) -> Range<K, ()> {
		Range::new(min, max, ())
	}

	/// A bare range containing exactly `point`.
	pub const fn singleton(point: K) -> Range<K, ()>
	where
		K: Copy,
	{
		Range::new(point, point, ())
	}

	/// A bare range open on the left: `[K::MIN, max]`.
	pub fn up_to(max: K) -> Range<K, ()>
	where
		K: Bounded,
	{
		Range::new(K::MIN, max, ())
	}

	/// A bare range open on the right: `[min, K::MAX]`.
	pub fn starting_at(min: K) -> Range<K, ()>
	where
		K: Bounded,
	{
		Range::new(min, K::MAX, ())
	}

	/// The bare range containing every value of `K`.
	pub fn all() -> Range<K, ()>
	where
		K: Bounded,
	{
		Range::new(K::MIN, K::MAX, ())
	}
}
