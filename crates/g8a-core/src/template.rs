//! `{{ path }}` placeholder rendering.
//!
//! A placeholder is `{{`, optional whitespace, a dot-delimited path, optional
//! whitespace, `}}`. Each placeholder is replaced by the escaped value found
//! at that path in the data item, or by nothing when the path is missing or
//! falsy.

use crate::escape::clean_value;
use crate::path::get;
use crate::selection::Selection;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
	PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*([^}]*)\s*\}\}").unwrap())
}

/// Renders `template` once against a single data item.
///
/// ```
/// use g8a_core::template::render;
/// use serde_json::json;
///
/// let html = render("<b>{{ user.name }}</b>", &json!({"user": {"name": "<Ada>"}}));
/// assert_eq!(html, "<b>&lt;Ada&gt;</b>");
/// ```
pub fn render(template: &str, item: &Value) -> String {
	placeholder()
		.replace_all(template, |caps: &Captures<'_>| {
			let path = caps[1].trim();
			clean_value(&get(path, item, Value::Null))
		})
		.into_owned()
}

/// Renders `template` against `data`. A JSON array renders every item in
/// order and concatenates the results; any other value renders once.
pub fn render_all(template: &str, data: &Value) -> String {
	Selection::from(data)
		.map(|item| render(template, item))
		.into_vec()
		.concat()
}
