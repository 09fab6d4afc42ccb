//! Path-based access over addressable stores.
//!
//! A [`Store`] is anything that can be read and written by a string key.
//! JSON values are the in-memory store: their keys are dot-delimited paths
//! such as `"user.address.city"`. The browser crate adds cookie and local
//! storage stores with plain string keys.
//!
//! ## Falsy segments
//!
//! [`get`] treats a segment whose value is falsy (`null`, `false`, `0`,
//! `""`) as missing and returns the default. Use [`lookup`] when only
//! missing keys and `null` should count as absent.
//!
//! ```
//! use g8a_core::{get, lookup};
//! use serde_json::json;
//!
//! let data = json!({"a": {"b": 0}});
//! assert_eq!(get("a.b", &data, json!(99)), json!(99));
//! assert_eq!(lookup("a.b", &data), Some(&json!(0)));
//! ```

use serde_json::{Map, Value};
use std::convert::Infallible;

/// Options applied when writing to a [`Store`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WriteOptions {
	/// Lifetime in days. Only cookie stores use it; zero or `None` means a
	/// session cookie.
	pub days: Option<f64>,
}

impl WriteOptions {
	/// Options expiring the entry after `days` days.
	pub fn days(days: f64) -> Self {
		Self { days: Some(days) }
	}
}

/// A key-addressable store that [`get`] and [`set`] operate on.
pub trait Store {
	/// The value type held by the store.
	type Item;
	/// Error raised by a failed write.
	type Error;

	/// Reads the entry for `key`, or `None` when it is absent.
	fn read(&self, key: &str) -> Option<Self::Item>;

	/// Writes `value` under `key`.
	fn write(&mut self, key: &str, value: Self::Item, options: &WriteOptions)
	-> Result<(), Self::Error>;
}

impl Store for Value {
	type Item = Value;
	type Error = Infallible;

	fn read(&self, key: &str) -> Option<Value> {
		resolve(key, self, is_truthy).cloned()
	}

	fn write(&mut self, key: &str, value: Value, _options: &WriteOptions) -> Result<(), Infallible> {
		set_path(self, key, value);
		Ok(())
	}
}

/// Reads `key` from `store`, falling back to `default` when it is absent.
pub fn get<S>(key: &str, store: &S, default: S::Item) -> S::Item
where
	S: Store + ?Sized,
{
	store.read(key).unwrap_or(default)
}

/// Writes `value` under `key` in a JSON value, creating intermediate objects.
///
/// ```
/// use g8a_core::set;
/// use serde_json::json;
///
/// let mut data = json!({});
/// set("a.b.c", json!(1), &mut data);
/// assert_eq!(data, json!({"a": {"b": {"c": 1}}}));
/// ```
pub fn set(key: &str, value: Value, target: &mut Value) {
	set_path(target, key, value);
}

/// Writes `value` under `key` in any [`Store`].
pub fn set_with<S>(
	key: &str,
	value: S::Item,
	store: &mut S,
	options: &WriteOptions,
) -> Result<(), S::Error>
where
	S: Store + ?Sized,
{
	store.write(key, value, options)
}

/// Looks up a dot-delimited path, treating only missing keys and `null` as absent.
pub fn lookup<'a>(path: &str, value: &'a Value) -> Option<&'a Value> {
	resolve(path, value, |v| !v.is_null())
}

fn resolve<'a>(path: &str, value: &'a Value, present: fn(&Value) -> bool) -> Option<&'a Value> {
	path.split('.').try_fold(value, |current, segment| {
		index(current, segment).filter(|next| present(next))
	})
}

fn index<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
	match value {
		Value::Object(map) => map.get(segment),
		Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
		_ => None,
	}
}

/// Writes `value` at a dot-delimited path inside `target`.
///
/// Missing or `null` intermediate segments become empty objects, and so do
/// scalar intermediates. Arrays are never replaced: a numeric segment
/// indexes into them, padding with `null` when it lies past the end. A
/// non-numeric segment on an array, or an index more than
/// [`MAX_INDEX_GAP`] past the end, leaves `target` unchanged.
pub fn set_path(target: &mut Value, path: &str, value: Value) {
	let (parents, last) = match path.rsplit_once('.') {
		Some((parents, last)) => (Some(parents), last),
		None => (None, path),
	};

	let mut current = target;
	if let Some(parents) = parents {
		for segment in parents.split('.') {
			match container_mut(current, segment) {
				Some(next) => current = next,
				None => return,
			}
		}
	}
	if let Some(slot) = slot_mut(current, last) {
		*slot = value;
	}
}

/// Largest number of `null` items [`set_path`] pads an array with.
pub const MAX_INDEX_GAP: usize = 1024;

fn slot_mut<'a>(parent: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
	match parent {
		Value::Array(items) => {
			let Ok(i) = segment.parse::<usize>() else {
				crate::warn_log!("cannot write key `{}` into an array", segment);
				return None;
			};
			if i >= items.len() {
				if i - items.len() > MAX_INDEX_GAP {
					crate::warn_log!("index {} is too far past the array end ({})", i, items.len());
					return None;
				}
				items.resize(i + 1, Value::Null);
			}
			items.get_mut(i)
		}
		other => Some(
			ensure_object(other)
				.entry(segment.to_owned())
				.or_insert(Value::Null),
		),
	}
}

fn container_mut<'a>(parent: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
	let slot = slot_mut(parent, segment)?;
	if !(slot.is_object() || slot.is_array()) {
		*slot = Value::Object(Map::new());
	}
	Some(slot)
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
	match value {
		Value::Object(map) => map,
		other => {
			*other = Value::Object(Map::new());
			ensure_object(other)
		}
	}
}

/// Reports whether a value counts as present for [`get`].
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// The `typeof`-style kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Objects and arrays.
	Object,
	/// Strings.
	String,
	/// Numbers.
	Number,
	/// Booleans.
	Boolean,
	/// `null`.
	Null,
}

impl Kind {
	/// Returns the kind of `value`.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Object(_) | Value::Array(_) => Self::Object,
			Value::String(_) => Self::String,
			Value::Number(_) => Self::Number,
			Value::Bool(_) => Self::Boolean,
			Value::Null => Self::Null,
		}
	}

	/// Lower-case name of the kind.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Object => "object",
			Self::String => "string",
			Self::Number => "number",
			Self::Boolean => "boolean",
			Self::Null => "null",
		}
	}
}

/// Checks whether `value` is of the given kind.
pub fn is(value: &Value, kind: Kind) -> bool {
	Kind::of(value) == kind
}
