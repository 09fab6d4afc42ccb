//! Templates stored in the page.
//!
//! A template is any element whose id is the template name, typically a
//! `<template>` or `<script type="text/html">` tag. Its inner markup is read
//! on every call; nothing is cached.

use crate::error::DomError;
use crate::select::html;
use g8a_core::template::render_all;
use serde_json::Value;

/// Renders template `name` against `data`.
///
/// A JSON array renders each item and concatenates the results. A missing
/// template renders as an empty string.
///
/// ```ignore
/// // <script type="text/html" id="row"><li>{{ name }}</li></script>
/// let rows = tpl("row", &json!([{"name": "x"}, {"name": "y"}]))?;
/// assert_eq!(rows, "<li>x</li><li>y</li>");
/// ```
pub fn tpl(name: &str, data: &Value) -> Result<String, DomError> {
	let source = match html(&format!("#{}", name))? {
		Some(source) => source,
		None => {
			g8a_core::warn_log!("template `{}` not found", name);
			String::new()
		}
	};
	Ok(render_all(&source, data))
}
