//! Cookie string handling.
//!
//! The browser exposes cookies as one `name1=value1; name2=value2` string
//! and accepts writes as single `Set-Cookie`-style lines. These helpers parse
//! and build those strings; the browser store in `g8a-dom` does the I/O.

use chrono::{DateTime, TimeDelta, Utc};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Latest expiry written: `Fri, 31 Dec 9999 23:59:59 GMT`.
const LATEST_EXPIRY_SECS: i64 = 253_402_300_799;

/// Finds the value of cookie `name` in a raw cookie string.
///
/// Entries are split on `;` and stripped of leading spaces; the first entry
/// starting with `name=` wins. The value is percent-decoded, falling back to
/// the raw text when it is not valid UTF-8 once decoded.
///
/// ```
/// use g8a_core::cookie::find_cookie;
///
/// let raw = "theme=dark; session=a%20b";
/// assert_eq!(find_cookie(raw, "session").as_deref(), Some("a b"));
/// assert_eq!(find_cookie(raw, "missing"), None);
/// ```
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
	let prefix = format!("{}=", name);
	raw.split(';')
		.map(|entry| entry.trim_start_matches(' '))
		.find_map(|entry| entry.strip_prefix(&prefix))
		.map(|value| {
			urlencoding::decode(value)
				.map(|decoded| decoded.into_owned())
				.unwrap_or_else(|_| value.to_owned())
		})
}

/// Builds the line written to `document.cookie`.
///
/// The value is percent-encoded and the cookie is scoped to `/`.
pub fn format_cookie(name: &str, value: &str, expires: Option<DateTime<Utc>>) -> String {
	let expires = expires
		.map(|at| format!("; expires={}", to_utc_string(at)))
		.unwrap_or_default();
	format!("{}={}{}; path=/", name, urlencoding::encode(value), expires)
}

/// Expiry instant `days` days after `now`.
///
/// Zero (or a non-finite count) means no expiry: the cookie lasts for the
/// session. Negative counts give a past instant, which deletes the cookie.
/// Counts too large to represent are clamped: far-future expiries to the
/// end of year 9999, far-past ones to the Unix epoch.
pub fn expiry_after_days(now: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
	if days == 0.0 || !days.is_finite() {
		return None;
	}
	let latest = DateTime::from_timestamp(LATEST_EXPIRY_SECS, 0).unwrap_or(DateTime::<Utc>::MAX_UTC);
	let at = TimeDelta::try_milliseconds((days * MILLIS_PER_DAY) as i64)
		.and_then(|delta| now.checked_add_signed(delta));
	Some(match at {
		Some(at) => at.min(latest),
		None if days > 0.0 => latest,
		None => DateTime::UNIX_EPOCH,
	})
}

/// Formats an instant the way `Date.prototype.toUTCString` does.
pub fn to_utc_string(at: DateTime<Utc>) -> String {
	at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
