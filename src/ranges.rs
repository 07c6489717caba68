use crate::Range;

/// A collection of sortable and searchable [`Range`] instances.
///
/// The collection is a plain vector: nothing keeps it ordered on insertion.
/// Call [`Ranges::sort`] before [`Ranges::search`]; a search over an
/// unsorted collection returns an unspecified result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranges<K, V>(Vec<Range<K, V>>);

impl<K, V> Ranges<K, V> {
	/// Create a new empty collection.
	pub fn new() -> Ranges<K, V> {
		Ranges(Vec::new())
	}

	/// The number of ranges in the collection.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[Range<K, V>] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Range<K, V>> {
		self.0.iter()
	}

	/// Append a range at the end of the collection.
	pub fn push(&mut self, range: Range<K, V>) {
		self.0.push(range);
	}

	/// Whether the range at index `i` must sort before the range at index
	/// `j`, that is, whether `self[i].min < self[j].min`.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds. Passing one is a caller
	/// bug, not a recoverable condition.
	pub fn less(&self, i: usize, j: usize) -> bool
	where
		K: Ord,
	{
		self.0[i].min < self.0[j].min
	}

	/// Exchange the ranges at indices `i` and `j` in place.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds, like [`Ranges::less`].
	pub fn swap(&mut self, i: usize, j: usize) {
		self.0.swap(i, j);
	}

	/// Sort the collection ascending by `min`.
	///
	/// The sort is stable, although nothing downstream relies on the
	/// relative order of ranges sharing a `min`.
	pub fn sort(&mut self)
	where
		K: Ord,
	{
		self.0.sort_by(|a, b| a.min.cmp(&b.min));
	}

	/// Binary-search the first range containing `point` and return a
	/// reference to its value, or `None` when no range contains it.
	///
	/// The collection must already be sorted ascending by `min` (see
	/// [`Ranges::sort`]). Both bounds are inclusive. Runs in O(log n).
	pub fn search(&self, point: K) -> Option<&V>
	where
		K: Ord + Copy,
	{
		// First index whose `max` does not fall below the point. The point
		// is contained there or nowhere.
		let i = self.0.partition_point(|range| range.max < point);
		match self.0.get(i) {
			Some(range) if range.contains(point) => Some(&range.value),
			_ => None,
		}
	}
}

impl<K, V> Default for Ranges<K, V> {
	fn default() -> Ranges<K, V> {
		Ranges::new()
	}
}

impl<K, V> From<Vec<Range<K, V>>> for Ranges<K, V> {
	fn from(ranges: Vec<Range<K, V>>) -> Ranges<K, V> {
		Ranges(ranges)
	}
}

impl<K, V> FromIterator<Range<K, V>> for Ranges<K, V> {
	fn from_iter<I: IntoIterator<Item = Range<K, V>>>(iter: I) -> Ranges<K, V> {
		Ranges(iter.into_iter().collect())
	}
}

impl<K, V> Extend<Range<K, V>> for Ranges<K, V> {
	fn extend<I: IntoIterator<Item = Range<K, V>>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl<K, V> std::ops::Index<usize> for Ranges<K, V> {
	type Output = Range<K, V>;

	fn index(&self, index: usize) -> &Range<K, V> {
		&self.0[index]
	}
}

impl<K, V> IntoIterator for Ranges<K, V> {
	type Item = Range<K, V>;
	type IntoIter = std::vec::IntoIter<Range<K, V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, K, V> IntoIterator for &'a Ranges<K, V> {
	type Item = &'a Range<K, V>;
	type IntoIter = std::slice::Iter<'a, Range<K, V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
