//! HTML escaping for template output.

use crate::path::is_truthy;
use serde_json::Value;

/// Replacement table, applied in order over the whole string.
const REPLACEMENTS: [(char, &str); 6] = [
	('&', "&amp;"),
	('<', "&lt;"),
	('>', "&gt;"),
	('"', "&quot;"),
	('\'', "&#x27;"),
	('/', "&#x2F;"),
];

/// Escapes `&`, `<`, `>`, `"`, `'` and `/` for safe insertion into HTML.
///
/// Each replacement runs over the full output of the previous one, starting
/// with `&`, so escaping is not idempotent: running it twice escapes the
/// ampersands of the first pass again.
///
/// # Examples
///
/// ```
/// use g8a_core::clean;
///
/// assert_eq!(clean("<b>&</b>"), "&lt;b&gt;&amp;&lt;&#x2F;b&gt;");
/// assert_eq!(clean(&clean("&")), "&amp;amp;");
/// ```
pub fn clean(input: &str) -> String {
	REPLACEMENTS
		.iter()
		.fold(input.to_owned(), |acc, (from, to)| acc.replace(*from, to))
}

/// Escapes the display form of a JSON value; falsy values produce `""`.
pub fn clean_value(value: &Value) -> String {
	if !is_truthy(value) {
		return String::new();
	}
	clean(&display(value))
}

/// Display form used for template output: strings verbatim, scalars via
/// their JSON form, containers as compact JSON.
pub(crate) fn display(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
