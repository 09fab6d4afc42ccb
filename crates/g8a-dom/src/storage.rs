//! Cookie and local storage stores.
//!
//! Both implement [`g8a_core::Store`] so they work with the generic
//! [`get`](g8a_core::get) and [`set_with`](g8a_core::set_with) helpers:
//!
//! ```ignore
//! use g8a_core::{WriteOptions, get, set_with};
//! use g8a_dom::storage::{CookieStore, LocalStore};
//!
//! let mut cookies = CookieStore::new()?;
//! set_with("theme", "dark".to_string(), &mut cookies, &WriteOptions::days(30.0))?;
//! assert_eq!(get("theme", &cookies, String::new()), "dark");
//!
//! let mut local = LocalStore::new()?;
//! set_with("draft", "hello".to_string(), &mut local, &WriteOptions::default())?;
//! ```

use crate::document::{html_document, now_millis, window};
use crate::error::DomError;
use chrono::DateTime;
use g8a_core::cookie::{expiry_after_days, find_cookie, format_cookie};
use g8a_core::{Store, WriteOptions};
use web_sys::{HtmlDocument, Storage};

/// The page's cookies.
#[derive(Debug, Clone)]
pub struct CookieStore {
	document: HtmlDocument,
}

impl CookieStore {
	/// Binds to the current document's cookies.
	pub fn new() -> Result<Self, DomError> {
		Ok(Self {
			document: html_document()?,
		})
	}

	/// The raw `document.cookie` string.
	pub fn raw(&self) -> Result<String, DomError> {
		Ok(self.document.cookie()?)
	}

	/// Expires cookie `name` immediately.
	pub fn remove(&mut self, name: &str) -> Result<(), DomError> {
		self.write(name, String::new(), &WriteOptions::days(-1.0))
	}
}

impl Store for CookieStore {
	type Item = String;
	type Error = DomError;

	fn read(&self, key: &str) -> Option<String> {
		match self.raw() {
			Ok(raw) => find_cookie(&raw, key),
			Err(e) => {
				g8a_core::warn_log!("cannot read cookies: {}", e);
				None
			}
		}
	}

	fn write(&mut self, key: &str, value: String, options: &WriteOptions) -> Result<(), DomError> {
		let expires = match options.days {
			Some(days) => DateTime::from_timestamp_millis(now_millis() as i64)
				.and_then(|now| expiry_after_days(now, days)),
			None => None,
		};
		self.document
			.set_cookie(&format_cookie(key, &value, expires))?;
		Ok(())
	}
}

/// The origin's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStore {
	storage: Storage,
}

impl LocalStore {
	/// Binds to `window.localStorage`.
	pub fn new() -> Result<Self, DomError> {
		let storage = window()?
			.local_storage()
			.map_err(|_| DomError::NoStorage)?
			.ok_or(DomError::NoStorage)?;
		Ok(Self { storage })
	}

	/// Deletes `key`.
	pub fn remove(&mut self, key: &str) -> Result<(), DomError> {
		Ok(self.storage.remove_item(key)?)
	}
}

impl Store for LocalStore {
	type Item = String;
	type Error = DomError;

	/// Empty items read as absent, like missing ones.
	fn read(&self, key: &str) -> Option<String> {
		match self.storage.get_item(key) {
			Ok(item) => item.filter(|v| !v.is_empty()),
			Err(e) => {
				g8a_core::warn_log!("cannot read local storage key `{}`: {}", key, DomError::from(e));
				None
			}
		}
	}

	fn write(&mut self, key: &str, value: String, _options: &WriteOptions) -> Result<(), DomError> {
		Ok(self.storage.set_item(key, &value)?)
	}
}
