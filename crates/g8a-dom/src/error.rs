//! Error type for the browser bindings.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised when a browser API is unavailable or throws.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// Window object not available.
	#[error("no window object")]
	NoWindow,
	/// Document object not available.
	#[error("no document object")]
	NoDocument,
	/// Local storage is disabled or not available.
	#[error("local storage is not available")]
	NoStorage,
	/// The selector could not be parsed.
	#[error("invalid selector `{selector}`: {message}")]
	InvalidSelector {
		/// The offending selector.
		selector: String,
		/// Message of the thrown exception.
		message: String,
	},
	/// Any other exception thrown by a browser API.
	#[error("browser API error: {0}")]
	Js(String),
}

impl DomError {
	pub(crate) fn invalid_selector(selector: &str, err: JsValue) -> Self {
		let message = js_message(&err);
		g8a_core::warn_log!("invalid selector `{}`: {}", selector, message);
		Self::InvalidSelector {
			selector: selector.to_owned(),
			message,
		}
	}
}

impl From<JsValue> for DomError {
	fn from(err: JsValue) -> Self {
		Self::Js(js_message(&err))
	}
}

/// Extracts a readable message from a thrown JS value.
pub(crate) fn js_message(err: &JsValue) -> String {
	if let Some(error) = err.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
