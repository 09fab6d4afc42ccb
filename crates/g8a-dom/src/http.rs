//! XMLHttpRequest wrapper.
//!
//! [`req`] plans a request from explicit [`Settings`], sends it, and returns
//! the live [`RequestHandle`] right away. The callback runs on a later turn
//! of the event loop with a [`Reply`]:
//!
//! - status in `[200, 400)`: `ok = true`, body parsed as JSON or kept as text
//! - any other status: `ok = false`, same body handling
//! - network error or timeout: `ok = false`, no status, no body
//!
//! ```ignore
//! use g8a_core::{Payload, Settings};
//! use g8a_dom::http::{RequestPayload, req};
//!
//! let settings = Settings::new().with_base_url("/api").with_timeout(5000);
//! let handle = req(&settings, "get", "items", Some(Payload::fields([("q", "a b")]).into()), |reply| {
//!     if reply.ok {
//!         // reply.body holds Body::Json(..) for JSON responses
//!     }
//! })?;
//! ```

use crate::document::new_request;
use crate::error::DomError;
use g8a_core::{Payload, Reply, RequestPlan, Settings};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{FormData, XmlHttpRequest};

/// Data sent with a request.
#[derive(Debug, Clone)]
pub enum RequestPayload {
	/// Fields or text, encoded by the request plan.
	Plain(Payload),
	/// A multipart body. Sent as-is for non-GET requests.
	FormData(FormData),
}

impl From<Payload> for RequestPayload {
	fn from(payload: Payload) -> Self {
		Self::Plain(payload)
	}
}

impl From<FormData> for RequestPayload {
	fn from(data: FormData) -> Self {
		Self::FormData(data)
	}
}

/// A request in flight.
#[derive(Clone)]
pub struct RequestHandle {
	xhr: XmlHttpRequest,
	pending: Completion,
}

impl RequestHandle {
	/// Cancels the request. The callback is not invoked afterwards and the
	/// event handlers are released.
	pub fn abort(&self) -> Result<(), DomError> {
		let _ = release(&self.xhr, &self.pending);
		Ok(self.xhr.abort()?)
	}

	/// The `readyState` (0 unsent through 4 done).
	pub fn ready_state(&self) -> u16 {
		self.xhr.ready_state()
	}

	/// The HTTP status, or 0 before the response arrives.
	pub fn status(&self) -> u16 {
		self.xhr.status().unwrap_or(0)
	}

	/// Returns true until the request completes, fails or is aborted.
	pub fn is_pending(&self) -> bool {
		self.pending.borrow().handlers.is_some()
	}

	/// The underlying request object.
	pub fn as_xhr(&self) -> &XmlHttpRequest {
		&self.xhr
	}
}

impl fmt::Debug for RequestHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RequestHandle")
			.field("xhr", &self.xhr)
			.field("pending", &self.is_pending())
			.finish()
	}
}

/// The load, error and timeout listeners of one request.
struct Handlers {
	_load: Closure<dyn FnMut()>,
	_error: Closure<dyn FnMut()>,
	_timeout: Closure<dyn FnMut()>,
}

/// State shared by the listeners; the first one to fire settles it.
struct Pending {
	callback: Option<Box<dyn FnOnce(Reply)>>,
	handlers: Option<Handlers>,
}

type Completion = Rc<RefCell<Pending>>;

/// Detaches and drops the listeners, handing back the callback if it has
/// not run yet.
///
/// The listeners hold the completion slot, so dropping them here also
/// breaks that reference cycle.
fn release(xhr: &XmlHttpRequest, slot: &Completion) -> Option<Box<dyn FnOnce(Reply)>> {
	let (callback, handlers) = {
		let mut pending = slot.borrow_mut();
		(pending.callback.take(), pending.handlers.take())
	};
	xhr.set_onload(None);
	xhr.set_onerror(None);
	xhr.set_ontimeout(None);
	drop(handlers);
	callback
}

fn complete(xhr: &XmlHttpRequest, slot: &Completion, reply: Reply) {
	if let Some(callback) = release(xhr, slot) {
		callback(reply);
	}
}

fn listener<R>(xhr: &XmlHttpRequest, slot: &Completion, reply: R) -> Closure<dyn FnMut()>
where
	R: Fn(&XmlHttpRequest) -> Reply + 'static,
{
	let xhr = xhr.clone();
	let slot = slot.clone();
	Closure::wrap(Box::new(move || {
		let outcome = reply(&xhr);
		complete(&xhr, &slot, outcome);
	}) as Box<dyn FnMut()>)
}

/// Sends an asynchronous request and returns its handle immediately.
///
/// GET payloads become the query string; other methods send the payload as
/// the body. Every request carries the form content type first, then the
/// configured headers. The callback fires at most once, and all listeners
/// are dropped as soon as the request settles.
pub fn req<F>(
	settings: &Settings,
	method: &str,
	url: &str,
	payload: Option<RequestPayload>,
	callback: F,
) -> Result<RequestHandle, DomError>
where
	F: FnOnce(Reply) + 'static,
{
	let mut plan = RequestPlan::new(settings, method, url);
	let mut form_data = None;
	match payload {
		Some(RequestPayload::Plain(payload)) => plan = plan.with_payload(&payload),
		Some(RequestPayload::FormData(data)) if !plan.is_get() => form_data = Some(data),
		Some(RequestPayload::FormData(_)) => {
			g8a_core::warn_log!("form data cannot be sent with GET {}, ignoring it", plan.url);
		}
		None => {}
	}

	let xhr = new_request()?;
	xhr.open_with_async(&plan.method, &plan.url, true)?;
	for (name, value) in &plan.headers {
		xhr.set_request_header(name, value)?;
	}
	if let Some(timeout) = plan.timeout {
		xhr.set_timeout(timeout);
	}

	let callback: Box<dyn FnOnce(Reply)> = Box::new(callback);
	let slot: Completion = Rc::new(RefCell::new(Pending {
		callback: Some(callback),
		handlers: None,
	}));

	let load = listener(&xhr, &slot, |xhr| {
		let status = xhr.status().unwrap_or(0);
		let text = xhr.response_text().ok().flatten().unwrap_or_default();
		Reply::from_response(status, &text)
	});
	let error = {
		let url = plan.url.clone();
		listener(&xhr, &slot, move |_| {
			g8a_core::warn_log!("request to {} failed", url);
			Reply::failure()
		})
	};
	let timeout = {
		let url = plan.url.clone();
		listener(&xhr, &slot, move |_| {
			g8a_core::warn_log!("request to {} timed out", url);
			Reply::failure()
		})
	};
	xhr.set_onload(Some(load.as_ref().unchecked_ref()));
	xhr.set_onerror(Some(error.as_ref().unchecked_ref()));
	xhr.set_ontimeout(Some(timeout.as_ref().unchecked_ref()));
	slot.borrow_mut().handlers = Some(Handlers {
		_load: load,
		_error: error,
		_timeout: timeout,
	});

	let sent = match (&plan.body, &form_data) {
		(_, Some(data)) => xhr.send_with_opt_form_data(Some(data)),
		(Some(body), None) => xhr.send_with_opt_str(Some(body.as_str())),
		(None, None) => xhr.send(),
	};
	if let Err(e) = sent {
		let _ = release(&xhr, &slot);
		return Err(e.into());
	}

	Ok(RequestHandle { xhr, pending: slot })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_req_fails_cleanly_outside_browser() {
		let result = req(&Settings::new(), "get", "items", None, |_| {});
		assert_eq!(result.unwrap_err(), DomError::NoWindow);
	}

	#[rstest]
	fn test_payload_conversions() {
		let payload: RequestPayload = Payload::Text("x".into()).into();
		assert!(matches!(payload, RequestPayload::Plain(Payload::Text(_))));
	}
}
