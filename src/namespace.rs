//! The `G8a` namespace value.
//!
//! Holds the request [`Settings`] that would otherwise be global, and
//! forwards requests through them.

use g8a_core::{Reply, Settings, SettingsError};
use g8a_dom::{DomError, RequestHandle, RequestPayload};
use serde_json::Value;

/// Library entry point owning the request settings.
///
/// ```ignore
/// use g8a::G8a;
/// use serde_json::json;
///
/// let mut g8a = G8a::new();
/// g8a.setup(&json!({ "baseUrl": "/api", "headers.X-Token": "secret" }))?;
/// g8a.req("get", "items", None, |reply| g8a::d!("{:?}", reply))?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct G8a {
	settings: Settings,
}

impl G8a {
	/// Creates a namespace with empty settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a namespace around existing settings.
	pub fn with_settings(settings: Settings) -> Self {
		Self { settings }
	}

	/// The current settings.
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Mutable access to the settings.
	pub fn settings_mut(&mut self) -> &mut Settings {
		&mut self.settings
	}

	/// Merges a JSON options object into the settings.
	///
	/// Top-level keys replace the current ones; dotted keys such as
	/// `"headers.X-Token"` write through the path. On error the settings
	/// are left untouched.
	pub fn setup(&mut self, options: &Value) -> Result<(), SettingsError> {
		self.settings.setup(options)
	}

	/// Sends a request using the held settings. See [`g8a_dom::req`].
	pub fn req<F>(
		&self,
		method: &str,
		url: &str,
		payload: Option<RequestPayload>,
		callback: F,
	) -> Result<RequestHandle, DomError>
	where
		F: FnOnce(Reply) + 'static,
	{
		g8a_dom::req(&self.settings, method, url, payload, callback)
	}
}
