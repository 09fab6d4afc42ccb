//! g8a DOM - Browser bindings
//!
//! Thin wrappers over `web-sys` for selecting and mutating elements,
//! reading forms, persisting to cookies or local storage, sending
//! XMLHttpRequests, rendering in-page templates, and delegating events.
//!
//! Outside `wasm32` every entry point compiles but reports
//! [`DomError::NoWindow`], so code depending on this crate builds and unit
//! tests natively.
//!
//! ## Modules
//!
//! - [`select`]: `el`, `html`, `text`, `attr`, `value`, `values`, and friends
//! - [`storage`]: [`CookieStore`] and [`LocalStore`]
//! - [`http`]: [`req`]
//! - [`template`]: [`tpl`]
//! - [`events`]: [`bind`]
//! - [`document`]: window and document access

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod events;
pub mod http;
pub mod select;
pub mod storage;
pub mod template;

pub use error::DomError;
pub use events::{DelegatedListener, bind};
pub use http::{RequestHandle, RequestPayload, req};
pub use select::{
	FormValues, append, attr, classes, el, html, prepend, remove, set_attr, set_classes,
	set_html, set_text, set_value, text, value, values,
};
pub use storage::{CookieStore, LocalStore};
pub use template::tpl;
