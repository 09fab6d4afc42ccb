//! # g8a
//!
//! Minimal browser helpers for WebAssembly: DOM selection and mutation,
//! `{{ path }}` templates, XMLHttpRequest with JSON parsing, cookie and
//! local storage access, and event delegation.
//!
//! It is a thin layer over `web-sys`, not a framework. There is no virtual
//! DOM and no reactive graph beyond the single-cell [`Watched`] observer.
//!
//! ## Crates
//!
//! - `g8a-core`: platform-independent logic (paths, escaping, templates,
//!   settings, request planning, cookies). Runs and tests on any target.
//! - `g8a-dom`: the `web-sys` bindings built on top of it.
//!
//! This crate re-exports both as one flat namespace and adds [`G8a`], the
//! value holding request settings.
//!
//! ## Feature Flags
//!
//! - `debug-hooks`: enables [`debug_log!`] output in debug builds
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use g8a::prelude::*;
//! use serde_json::json;
//!
//! let mut g8a = G8a::new();
//! g8a.setup(&json!({ "baseUrl": "/api", "timeout": 5000 }))?;
//!
//! g8a.req("get", "users", None, |reply| {
//!     if let Some(users) = reply.body.as_ref().and_then(Body::as_json) {
//!         let rows = tpl("user-row", users).unwrap_or_default();
//!         let _ = set_html("#users", &rows);
//!     }
//! })?;
//!
//! bind("#users .delete", "click", |event| {
//!     d!("delete clicked: {:?}", event.type_());
//! })?
//! .forget();
//! ```

#![warn(missing_docs)]

mod namespace;

pub use namespace::G8a;

// Platform-independent helpers
pub use g8a_core::{
	Body, Kind, Payload, Reply, RequestPlan, Selection, Settings, SettingsError, Store, Watched,
	WriteOptions, clean, clean_value, get, is, is_truthy, lookup, set, set_with,
};

// Logging macros
pub use g8a_core::{d, debug_log, error_log, info_log, warn_log};

// Browser bindings
pub use g8a_dom::{
	CookieStore, DelegatedListener, DomError, FormValues, LocalStore, RequestHandle,
	RequestPayload, append, attr, bind, classes, el, html, prepend, remove, req, set_attr,
	set_classes, set_html, set_text, set_value, text, tpl, value, values,
};

/// Applies `f` to a single value directly, or to each item of a collection
/// in order, keeping the shape of the input.
///
/// JSON arrays count as collections:
///
/// ```
/// use g8a::{Selection, map};
/// use serde_json::{Value, json};
///
/// let data = json!([1, 2]);
/// let doubled = map(&data, |v: &Value| v.as_i64().unwrap_or(0) * 2);
/// assert_eq!(doubled, Selection::Many(vec![2, 4]));
///
/// let one = json!(3);
/// assert_eq!(map(&one, |v: &Value| v.as_i64()), Selection::Single(Some(3)));
/// ```
pub fn map<T, R, F>(items: impl Into<Selection<T>>, f: F) -> Selection<R>
where
	F: FnMut(T) -> R,
{
	items.into().map(f)
}

/// Re-exports of the common helpers and types.
pub mod prelude {
	pub use crate::{
		Body, CookieStore, DelegatedListener, DomError, G8a, Kind, LocalStore, Payload, Reply,
		RequestPayload, Selection, Settings, Store, Watched, WriteOptions, append, attr, bind,
		classes, clean, el, get, html, is, map, prepend, remove, req, set, set_attr, set_classes,
		set_html, set_text, set_value, set_with, text, tpl, value, values,
	};
	pub use crate::{d, debug_log, error_log, info_log, warn_log};
}
