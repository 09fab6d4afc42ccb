//! Access to the global browser objects.
//!
//! Every helper in this crate reaches the browser through these functions.
//! Outside WASM they report the objects as unavailable, so the rest of the
//! crate compiles and fails cleanly on native targets.

use crate::error::DomError;
use web_sys::{Document, HtmlDocument, Window, XmlHttpRequest};

/// Returns the global `window`.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, DomError> {
	web_sys::window().ok_or(DomError::NoWindow)
}

/// Returns the global `window` (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, DomError> {
	Err(DomError::NoWindow)
}

/// Returns the page's `document`.
pub fn document() -> Result<Document, DomError> {
	window()?.document().ok_or(DomError::NoDocument)
}

/// Returns the page's `document` as an HTML document (for cookie access).
pub fn html_document() -> Result<HtmlDocument, DomError> {
	use wasm_bindgen::JsCast;

	document()?
		.dyn_into::<HtmlDocument>()
		.map_err(|_| DomError::NoDocument)
}

/// Creates a new `XMLHttpRequest`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn new_request() -> Result<XmlHttpRequest, DomError> {
	Ok(XmlHttpRequest::new()?)
}

/// Creates a new `XMLHttpRequest` (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn new_request() -> Result<XmlHttpRequest, DomError> {
	Err(DomError::NoWindow)
}

/// Milliseconds since the Unix epoch, from the browser clock.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_millis() -> f64 {
	js_sys::Date::now()
}

/// Milliseconds since the Unix epoch (non-WASM fallback to the system clock).
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_millis() -> f64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.as_millis() as f64)
		.unwrap_or(0.0)
}
