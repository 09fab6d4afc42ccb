//! Single-or-many results.
//!
//! [`Selection`] is the explicit form of "one match gives the bare value,
//! anything else gives a collection". It carries the dual behavior of the
//! mapping helper as well: [`Selection::map`] applies a function to a
//! `Single` value directly and element-wise to `Many`.

use serde_json::Value;

/// Either exactly one value or a collection of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
	/// A single bare value.
	Single(T),
	/// A collection, possibly empty or holding one item.
	Many(Vec<T>),
}

impl<T> Selection<T> {
	/// Builds a selection by cardinality: exactly one item becomes `Single`,
	/// zero or several become `Many`.
	pub fn from_matches(mut items: Vec<T>) -> Self {
		if items.len() == 1
			&& let Some(item) = items.pop()
		{
			return Self::Single(item);
		}
		Self::Many(items)
	}

	/// Number of values held.
	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	/// Returns true if no values are held.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the value when this is `Single`.
	pub fn single(&self) -> Option<&T> {
		match self {
			Self::Single(item) => Some(item),
			Self::Many(_) => None,
		}
	}

	/// Returns the first value in either shape.
	pub fn first(&self) -> Option<&T> {
		self.as_slice().first()
	}

	/// Views the values as a slice.
	pub fn as_slice(&self) -> &[T] {
		match self {
			Self::Single(item) => std::slice::from_ref(item),
			Self::Many(items) => items,
		}
	}

	/// Iterates over the values.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.as_slice().iter()
	}

	/// Flattens into a vector regardless of shape.
	pub fn into_vec(self) -> Vec<T> {
		match self {
			Self::Single(item) => vec![item],
			Self::Many(items) => items,
		}
	}

	/// Applies `f` to the single value, or to each value of a collection in
	/// order, keeping the shape.
	///
	/// ```
	/// use g8a_core::Selection;
	///
	/// assert_eq!(Selection::Single(2).map(|n| n * 10), Selection::Single(20));
	/// assert_eq!(
	/// 	Selection::Many(vec![1, 2]).map(|n| n * 10),
	/// 	Selection::Many(vec![10, 20])
	/// );
	/// ```
	pub fn map<R, F>(self, mut f: F) -> Selection<R>
	where
		F: FnMut(T) -> R,
	{
		match self {
			Self::Single(item) => Selection::Single(f(item)),
			Self::Many(items) => Selection::Many(items.into_iter().map(f).collect()),
		}
	}
}

impl<T> IntoIterator for Selection<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.into_vec().into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Selection<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// JSON arrays are collections; every other value is a single item.
impl<'a> From<&'a Value> for Selection<&'a Value> {
	fn from(value: &'a Value) -> Self {
		match value {
			Value::Array(items) => Self::Many(items.iter().collect()),
			other => Self::Single(other),
		}
	}
}

impl<T> From<Vec<T>> for Selection<T> {
	fn from(items: Vec<T>) -> Self {
		Self::Many(items)
	}
}
