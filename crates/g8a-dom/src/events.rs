//! Event delegation.
//!
//! [`bind`] attaches one listener to the document and forwards an event to
//! the handler only when the element that dispatched it matches the
//! selector. Elements added after binding are covered too.
//!
//! ```ignore
//! use g8a_dom::events::bind;
//!
//! bind("button.delete", "click", |event| {
//!     event.prevent_default();
//! })?
//! .forget();
//! ```

use crate::document::document;
use crate::error::DomError;
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget};

/// A listener registered by [`bind`].
///
/// Dropping the value removes the listener; call [`forget`](Self::forget)
/// to keep it for the lifetime of the page.
pub struct DelegatedListener {
	target: EventTarget,
	event: String,
	selector: String,
	closure: Option<Closure<dyn FnMut(Event)>>,
}

impl DelegatedListener {
	/// The event name listened for.
	pub fn event(&self) -> &str {
		&self.event
	}

	/// The selector events are filtered by.
	pub fn selector(&self) -> &str {
		&self.selector
	}

	/// Keeps the listener registered after this value is dropped.
	pub fn forget(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl Drop for DelegatedListener {
	fn drop(&mut self) {
		if let Some(closure) = self.closure.take() {
			let _ = self
				.target
				.remove_event_listener_with_callback(&self.event, closure.as_ref().unchecked_ref());
		}
	}
}

impl fmt::Debug for DelegatedListener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DelegatedListener")
			.field("event", &self.event)
			.field("selector", &self.selector)
			.field("active", &self.closure.is_some())
			.finish()
	}
}

/// Registers `handler` for `event` on the document, filtered by `selector`.
///
/// The selector is checked once up front so a malformed one is reported as
/// [`DomError::InvalidSelector`] instead of silently never matching.
pub fn bind<F>(selector: &str, event: &str, handler: F) -> Result<DelegatedListener, DomError>
where
	F: FnMut(Event) + 'static,
{
	let document = document()?;
	document
		.query_selector(selector)
		.map_err(|e| DomError::invalid_selector(selector, e))?;

	let mut handler = handler;
	let filter = selector.to_owned();
	let closure = Closure::wrap(Box::new(move |event: Event| {
		if target_matches(&event, &filter) {
			handler(event);
		}
	}) as Box<dyn FnMut(Event)>);

	document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

	Ok(DelegatedListener {
		target: document.into(),
		event: event.to_owned(),
		selector: selector.to_owned(),
		closure: Some(closure),
	})
}

/// Returns true when the element that dispatched `event` matches `selector`.
pub fn target_matches(event: &Event, selector: &str) -> bool {
	event
		.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.is_some_and(|element| element.matches(selector).unwrap_or(false))
}
