//! Error types for g8a core.

use thiserror::Error;

/// Errors raised while applying configuration options to [`Settings`](crate::Settings).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The options value was not a JSON object.
	#[error("settings options must be an object, got {0}")]
	NotAnObject(&'static str),

	/// The merged options do not describe valid settings.
	#[error("invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),
}
