//! Request planning and response classification.
//!
//! The browser crate sends requests through `XMLHttpRequest`; everything
//! that decides *what* to send and *how* to read the answer lives here:
//!
//! - [`RequestPlan`]: method, resolved URL, headers, body and timeout
//! - [`Payload`]: form fields or raw text supplied by the caller
//! - [`Body`] / [`Reply`]: the parsed response handed to the callback

use crate::escape::display;
use crate::settings::Settings;
use serde_json::Value;

/// Header name for the request content type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Content type sent with every request unless a configured header overrides it.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Data supplied with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
	/// Named fields. Query string for GET, url-encoded body otherwise.
	Fields(Vec<(String, String)>),
	/// Raw text. Appended as the query string for GET, sent as-is otherwise.
	Text(String),
}

impl Payload {
	/// Builds a field payload from name/value pairs.
	pub fn fields<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self::Fields(
			pairs
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}

	/// Converts a JSON value: objects become fields (strings verbatim, other
	/// values in their JSON form), strings become text, anything else becomes
	/// its JSON text.
	///
	/// Fields keep the object's key order, so a GET query string lists them
	/// as the caller wrote them.
	pub fn from_json(value: &Value) -> Self {
		match value {
			Value::Object(map) => Self::Fields(
				map.iter()
					.map(|(k, v)| (k.clone(), display(v)))
					.collect(),
			),
			Value::String(s) => Self::Text(s.clone()),
			other => Self::Text(other.to_string()),
		}
	}

	/// Encodes the payload for the wire.
	pub fn encode(&self) -> String {
		match self {
			Self::Fields(fields) => encode_query(fields),
			Self::Text(text) => text.clone(),
		}
	}
}

/// Encodes fields as `name=value` pairs joined by `&`, percent-encoding each value.
///
/// ```
/// use g8a_core::request::encode_query;
///
/// let fields = vec![("q".to_string(), "a b".to_string())];
/// assert_eq!(encode_query(&fields), "q=a%20b");
/// ```
pub fn encode_query(fields: &[(String, String)]) -> String {
	fields
		.iter()
		.map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
		.collect::<Vec<_>>()
		.join("&")
}

/// Everything needed to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
	/// Upper-cased method.
	pub method: String,
	/// URL after base URL resolution and query string encoding.
	pub url: String,
	/// Headers in the order they must be set.
	pub headers: Vec<(String, String)>,
	/// Body to send, if any.
	pub body: Option<String>,
	/// Timeout in milliseconds.
	pub timeout: Option<u32>,
}

impl RequestPlan {
	/// Plans a request without payload.
	///
	/// The default form content type comes first, configured headers after
	/// it, so a configured `Content-Type` wins.
	pub fn new(settings: &Settings, method: &str, url: &str) -> Self {
		let mut headers = vec![(CONTENT_TYPE_HEADER.to_owned(), FORM_CONTENT_TYPE.to_owned())];
		headers.extend(
			settings
				.headers
				.iter()
				.map(|(k, v)| (k.clone(), v.clone())),
		);

		Self {
			method: method.to_uppercase(),
			url: settings.resolve_url(url),
			headers,
			body: None,
			timeout: settings.timeout,
		}
	}

	/// Returns true for GET requests.
	pub fn is_get(&self) -> bool {
		self.method == "GET"
	}

	/// Attaches `payload`: appended to the URL as a query string for GET,
	/// stored as the body otherwise.
	///
	/// ```
	/// use g8a_core::{Payload, RequestPlan, Settings};
	///
	/// let settings = Settings::new().with_base_url("/api");
	/// let plan = RequestPlan::new(&settings, "get", "items")
	/// 	.with_payload(&Payload::fields([("q", "a b")]));
	/// assert_eq!(plan.url, "/api/items?q=a%20b");
	/// assert_eq!(plan.body, None);
	/// ```
	pub fn with_payload(mut self, payload: &Payload) -> Self {
		let encoded = payload.encode();
		if self.is_get() {
			self.url = format!("{}?{}", self.url, encoded);
		} else {
			self.body = Some(encoded);
		}
		self
	}

	/// Value of the effective header `name` (case-insensitive; last one set wins).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.rev()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

/// A response body: parsed JSON when possible, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
	/// The text parsed as JSON.
	Json(Value),
	/// The text as received.
	Text(String),
}

impl Body {
	/// Parses `text` as JSON, falling back to the raw text.
	pub fn parse(text: &str) -> Self {
		match serde_json::from_str(text) {
			Ok(value) => Self::Json(value),
			Err(e) => {
				crate::debug_log!("response is not JSON ({}), keeping text", e);
				Self::Text(text.to_owned())
			}
		}
	}

	/// The JSON value, if the body parsed.
	pub fn as_json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			Self::Text(_) => None,
		}
	}

	/// The raw text, if the body did not parse.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Json(_) => None,
			Self::Text(text) => Some(text),
		}
	}
}

/// Outcome of a request, passed to the completion callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
	/// True when the status is in `[200, 400)`.
	pub ok: bool,
	/// HTTP status; `None` on network failure or timeout.
	pub status: Option<u16>,
	/// Parsed body; `None` on network failure or timeout.
	pub body: Option<Body>,
}

impl Reply {
	/// Classifies a completed response.
	pub fn from_response(status: u16, text: &str) -> Self {
		Self {
			ok: is_success(status),
			status: Some(status),
			body: Some(Body::parse(text)),
		}
	}

	/// A network-level failure: no status and no body.
	pub fn failure() -> Self {
		Self {
			ok: false,
			status: None,
			body: None,
		}
	}
}

/// Returns true for statuses in `[200, 400)`.
pub fn is_success(status: u16) -> bool {
	(200..400).contains(&status)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_get_payload_becomes_query_string() {
		let settings = Settings::new().with_base_url("https://api.test");
		let plan = RequestPlan::new(&settings, "get", "items")
			.with_payload(&Payload::fields([("q", "a b")]));

		assert_eq!(plan.method, "GET");
		assert_eq!(plan.url, "https://api.test/items?q=a%20b");
		assert_eq!(plan.body, None);
	}

	#[rstest]
	fn test_query_keeps_field_order_and_encodes_values() {
		let payload = Payload::fields([("a", "1&2"), ("b", "é/?")]);
		assert_eq!(payload.encode(), "a=1%262&b=%C3%A9%2F%3F");
	}

	#[rstest]
	#[case("post")]
	#[case("Put")]
	#[case("DELETE")]
	fn test_non_get_payload_becomes_body(#[case] method: &str) {
		let plan = RequestPlan::new(&Settings::new(), method, "items")
			.with_payload(&Payload::fields([("name", "x y")]));

		assert_eq!(plan.method, method.to_uppercase());
		assert_eq!(plan.url, "items");
		assert_eq!(plan.body.as_deref(), Some("name=x%20y"));
	}

	#[rstest]
	fn test_text_payload_sent_verbatim() {
		let plan = RequestPlan::new(&Settings::new(), "post", "raw")
			.with_payload(&Payload::Text("{\"a\":1}".into()));
		assert_eq!(plan.body.as_deref(), Some("{\"a\":1}"));
	}

	#[rstest]
	fn test_default_content_type_header() {
		let plan = RequestPlan::new(&Settings::new(), "get", "x");
		assert_eq!(plan.headers.len(), 1);
		assert_eq!(plan.header("content-type"), Some(FORM_CONTENT_TYPE));
	}

	#[rstest]
	fn test_configured_headers_follow_default_and_override() {
		let settings = Settings::new()
			.with_header("Content-Type", "application/json")
			.with_header("X-Token", "t");
		let plan = RequestPlan::new(&settings, "post", "x");

		assert_eq!(plan.headers[0].1, FORM_CONTENT_TYPE);
		assert_eq!(plan.header("Content-Type"), Some("application/json"));
		assert_eq!(plan.header("x-token"), Some("t"));
	}

	#[rstest]
	fn test_plan_carries_timeout() {
		let settings = Settings::new().with_timeout(1500);
		assert_eq!(RequestPlan::new(&settings, "get", "x").timeout, Some(1500));
	}

	#[rstest]
	fn test_payload_from_json() {
		let payload = Payload::from_json(&json!({"n": 1, "s": "t"}));
		assert_eq!(
			payload,
			Payload::fields([("n", "1"), ("s", "t")])
		);
		assert_eq!(Payload::from_json(&json!("raw")), Payload::Text("raw".into()));
	}

	#[rstest]
	fn test_payload_from_json_keeps_key_order() {
		let payload = Payload::from_json(&json!({"zeta": "1", "alpha": "2", "mid": "3"}));
		assert_eq!(payload.encode(), "zeta=1&alpha=2&mid=3");

		let plan = RequestPlan::new(&Settings::new(), "get", "items").with_payload(&payload);
		assert_eq!(plan.url, "items?zeta=1&alpha=2&mid=3");
	}

	#[rstest]
	fn test_reply_ok_with_json() {
		let reply = Reply::from_response(200, r#"{"id": 1}"#);
		assert!(reply.ok);
		assert_eq!(reply.status, Some(200));
		assert_eq!(reply.body, Some(Body::Json(json!({"id": 1}))));
	}

	#[rstest]
	fn test_reply_error_with_text() {
		let reply = Reply::from_response(500, "Internal error");
		assert!(!reply.ok);
		assert_eq!(
			reply.body.as_ref().and_then(Body::as_text),
			Some("Internal error")
		);
	}

	#[rstest]
	fn test_reply_error_with_json() {
		let reply = Reply::from_response(422, r#"{"error": "bad"}"#);
		assert!(!reply.ok);
		assert_eq!(
			reply.body.as_ref().and_then(Body::as_json),
			Some(&json!({"error": "bad"}))
		);
	}

	#[rstest]
	fn test_reply_failure() {
		let reply = Reply::failure();
		assert!(!reply.ok);
		assert_eq!(reply.status, None);
		assert_eq!(reply.body, None);
	}

	#[rstest]
	#[case(199, false)]
	#[case(200, true)]
	#[case(204, true)]
	#[case(302, true)]
	#[case(399, true)]
	#[case(400, false)]
	#[case(404, false)]
	fn test_is_success(#[case] status: u16, #[case] expected: bool) {
		assert_eq!(is_success(status), expected);
	}

	#[rstest]
	fn test_empty_body_is_text() {
		assert_eq!(Body::parse(""), Body::Text(String::new()));
	}
}
