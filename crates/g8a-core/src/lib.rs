//! g8a Core - Platform-independent helpers
//!
//! Everything in this crate runs on any target. The browser bindings in
//! `g8a-dom` delegate the actual logic here so it can be tested natively.
//!
//! ## Modules
//!
//! - [`path`]: dot-delimited get/set over JSON values and the [`Store`] trait
//! - [`escape`]: HTML escaping ([`clean`])
//! - [`template`]: `{{ path }}` placeholder rendering
//! - [`selection`]: the single-or-many [`Selection`] result
//! - [`watch`]: the [`Watched`] observer cell
//! - [`settings`]: request [`Settings`] and their merge rules
//! - [`request`]: request planning and response classification
//! - [`cookie`]: cookie string parsing and formatting
//! - [`logging`]: console logging macros
//!
//! ## Example
//!
//! ```
//! use g8a_core::{get, set, template};
//! use serde_json::json;
//!
//! let mut data = json!({});
//! set("user.name", json!("Ada"), &mut data);
//! assert_eq!(get("user.name", &data, json!("")), json!("Ada"));
//!
//! let html = template::render_all("<li>{{ user.name }}</li>", &data);
//! assert_eq!(html, "<li>Ada</li>");
//! ```

#![warn(missing_docs)]

pub mod cookie;
pub mod error;
pub mod escape;
pub mod logging;
pub mod path;
pub mod request;
pub mod selection;
pub mod settings;
pub mod template;
pub mod watch;

pub use error::SettingsError;
pub use escape::{clean, clean_value};
pub use path::{Kind, Store, WriteOptions, get, is, is_truthy, lookup, set, set_path, set_with};
pub use request::{Body, Payload, Reply, RequestPlan};
pub use selection::Selection;
pub use settings::Settings;
pub use watch::Watched;

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub use web_sys as __web_sys;
