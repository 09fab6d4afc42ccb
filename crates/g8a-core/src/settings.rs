//! Request settings and their merge rules.
//!
//! [`Settings`] is the configuration read by the networking helper. It is an
//! explicit value: callers own it and hand it to each request. Options are
//! merged with [`Settings::setup`], which accepts the same JSON shape the
//! settings serialize to:
//!
//! ```
//! use g8a_core::Settings;
//! use serde_json::json;
//!
//! let mut settings = Settings::default();
//! settings.setup(&json!({"baseUrl": "/api", "timeout": 5000})).unwrap();
//! settings.setup(&json!({"headers.X-Token": "abc"})).unwrap();
//!
//! assert_eq!(settings.base_url.as_deref(), Some("/api"));
//! assert_eq!(settings.timeout, Some(5000));
//! assert_eq!(settings.headers["X-Token"], "abc");
//! ```

use crate::error::SettingsError;
use crate::path::{Kind, set_path};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Configuration for outgoing requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
	/// Prefix joined to every request URL with `/`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub base_url: Option<String>,

	/// Request timeout in milliseconds. `false`, `0` and `null` disable it.
	#[serde(
		deserialize_with = "deserialize_timeout",
		skip_serializing_if = "Option::is_none"
	)]
	pub timeout: Option<u32>,

	/// Headers applied after the default content type, in name order.
	pub headers: BTreeMap<String, String>,

	/// Any other option keys, kept as given.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeoutRepr {
	Millis(u32),
	Flag(bool),
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<TimeoutRepr>::deserialize(deserializer)? {
		Some(TimeoutRepr::Millis(0)) | Some(TimeoutRepr::Flag(_)) | None => None,
		Some(TimeoutRepr::Millis(ms)) => Some(ms),
	})
}

impl Settings {
	/// Creates empty settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the base URL.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Sets the timeout in milliseconds; zero disables it.
	pub fn with_timeout(mut self, millis: u32) -> Self {
		self.timeout = (millis > 0).then_some(millis);
		self
	}

	/// Adds or replaces a header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());
		self
	}

	/// Merges `options` into these settings.
	///
	/// Each top-level key overwrites the current entry as a whole, so
	/// `{"headers": {...}}` replaces every header. A dotted key such as
	/// `"headers.Accept"` writes through the path and leaves its siblings
	/// alone. On error the settings are left unchanged.
	pub fn setup(&mut self, options: &Value) -> Result<(), SettingsError> {
		let Value::Object(options) = options else {
			return Err(SettingsError::NotAnObject(Kind::of(options).as_str()));
		};

		let mut merged = serde_json::to_value(&*self)?;
		for (key, value) in options {
			set_path(&mut merged, key, value.clone());
		}
		*self = serde_json::from_value(merged)?;
		Ok(())
	}

	/// Resolves a request URL against the base URL.
	pub fn resolve_url(&self, url: &str) -> String {
		match self.base_url.as_deref() {
			Some(base) if !base.is_empty() => format!("{}/{}", base, url),
			_ => url.to_owned(),
		}
	}
}
