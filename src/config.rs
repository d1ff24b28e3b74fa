//! Per-run notifier options.
//!
//! Options mirror the publishing layer's configuration object (`indexNowKey`,
//! `indexNowKeyLocation`, `googleIndexingEnabled`, `googleCredentialsBase64`) and can also be read
//! from the process environment. Empty strings are treated as absent.

// self
use crate::_prelude::*;

/// Environment variable holding the IndexNow key.
pub const ENV_INDEX_NOW_KEY: &str = "INDEXNOW_KEY";
/// Environment variable holding the IndexNow key location.
pub const ENV_INDEX_NOW_KEY_LOCATION: &str = "INDEXNOW_KEY_LOCATION";
/// Environment variable enabling Google notifications (`true` to enable).
pub const ENV_GOOGLE_INDEXING_ENABLED: &str = "GOOGLE_INDEXING_ENABLED";
/// Environment variable holding the base64 service-account key file.
pub const ENV_GOOGLE_CREDENTIALS_BASE64: &str = "GOOGLE_SERVICE_ACCOUNT_BASE64";

/// Feature flag accepting either a boolean or a `"true"`/`"false"` string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ToggleRepr", into = "bool")]
pub struct Toggle(bool);
impl Toggle {
	/// Whether the flag is on.
	pub const fn is_enabled(self) -> bool {
		self.0
	}
}
impl From<bool> for Toggle {
	fn from(value: bool) -> Self {
		Self(value)
	}
}
impl From<Toggle> for bool {
	fn from(value: Toggle) -> Self {
		value.0
	}
}
impl FromStr for Toggle {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(s.trim().eq_ignore_ascii_case("true")))
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ToggleRepr {
	Bool(bool),
	Text(String),
	Null,
}
impl From<ToggleRepr> for Toggle {
	fn from(value: ToggleRepr) -> Self {
		match value {
			ToggleRepr::Bool(flag) => Self(flag),
			ToggleRepr::Text(text) => Self(text.trim().eq_ignore_ascii_case("true")),
			ToggleRepr::Null => Self(false),
		}
	}
}

/// Options recognized by [`Notifier::notify`](crate::flows::Notifier::notify).
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifyOptions {
	/// Shared IndexNow key; IndexNow is skipped when absent.
	pub index_now_key: Option<String>,
	/// Where the IndexNow key is hosted; defaults to `<origin>/<key>.txt` of the first URL.
	pub index_now_key_location: Option<String>,
	/// Enables Google Indexing API notifications.
	pub google_indexing_enabled: Toggle,
	/// Base64-encoded service-account JSON key file.
	pub google_credentials_base64: Option<String>,
}
impl NotifyOptions {
	/// Reads options from the process environment.
	pub fn from_env() -> Self {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads options through `lookup`, keyed by the `ENV_*` variable names.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		Self {
			index_now_key: lookup(ENV_INDEX_NOW_KEY),
			index_now_key_location: lookup(ENV_INDEX_NOW_KEY_LOCATION),
			google_indexing_enabled: lookup(ENV_GOOGLE_INDEXING_ENABLED)
				.map(|raw| raw.parse::<Toggle>().unwrap_or_default())
				.unwrap_or_default(),
			google_credentials_base64: lookup(ENV_GOOGLE_CREDENTIALS_BASE64),
		}
	}

	/// Sets the IndexNow key.
	pub fn with_index_now_key(mut self, key: impl Into<String>) -> Self {
		self.index_now_key = Some(key.into());

		self
	}

	/// Sets an explicit IndexNow key location.
	pub fn with_index_now_key_location(mut self, location: impl Into<String>) -> Self {
		self.index_now_key_location = Some(location.into());

		self
	}

	/// Turns Google notifications on or off.
	pub fn with_google_indexing(mut self, enabled: bool) -> Self {
		self.google_indexing_enabled = enabled.into();

		self
	}

	/// Sets the base64 service-account key file.
	pub fn with_google_credentials_base64(mut self, blob: impl Into<String>) -> Self {
		self.google_credentials_base64 = Some(blob.into());

		self
	}

	/// Returns the configured IndexNow key, if any.
	pub fn index_now_key(&self) -> Option<&str> {
		present(self.index_now_key.as_deref())
	}

	/// Returns the explicitly configured key location, if any.
	pub fn index_now_key_location(&self) -> Option<&str> {
		present(self.index_now_key_location.as_deref())
	}

	/// Returns the credentials blob when Google notifications are enabled and configured.
	pub fn google_credentials(&self) -> Option<&str> {
		if !self.google_indexing_enabled.is_enabled() {
			return None;
		}

		present(self.google_credentials_base64.as_deref())
	}
}
impl Debug for NotifyOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("NotifyOptions")
			.field("index_now_key", &self.index_now_key)
			.field("index_now_key_location", &self.index_now_key_location)
			.field("google_indexing_enabled", &self.google_indexing_enabled)
			.field("google_credentials_set", &self.google_credentials_base64.is_some())
			.finish()
	}
}

fn present(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn toggle_accepts_booleans_and_strings() {
		let parse = |raw: &str| {
			serde_json::from_str::<Toggle>(raw).expect("Toggle should deserialize.").is_enabled()
		};

		assert!(parse("true"));
		assert!(parse("\"true\""));
		assert!(parse("\" TRUE \""));
		assert!(!parse("false"));
		assert!(!parse("\"yes\""));
		assert!(!parse("\"\""));
		assert!(!parse("null"));
	}

	#[test]
	fn deserializes_camel_case_options() {
		let options: NotifyOptions = serde_json::from_value(serde_json::json!({
			"indexNowKey": "abc123",
			"googleIndexingEnabled": "true",
			"googleCredentialsBase64": "e30=",
		}))
		.expect("Options should deserialize.");

		assert_eq!(options.index_now_key(), Some("abc123"));
		assert_eq!(options.index_now_key_location(), None);
		assert_eq!(options.google_credentials(), Some("e30="));
	}

	#[test]
	fn google_credentials_require_the_flag() {
		let options = NotifyOptions::default().with_google_credentials_base64("e30=");

		assert_eq!(options.google_credentials(), None);
		assert_eq!(options.with_google_indexing(true).google_credentials(), Some("e30="));
	}

	#[test]
	fn empty_values_count_as_absent() {
		let options = NotifyOptions::default()
			.with_index_now_key("  ")
			.with_google_indexing(true)
			.with_google_credentials_base64("");

		assert_eq!(options.index_now_key(), None);
		assert_eq!(options.google_credentials(), None);
	}

	#[test]
	fn reads_options_from_lookup() {
		let options = NotifyOptions::from_lookup(|name| match name {
			ENV_INDEX_NOW_KEY => Some("env-key".into()),
			ENV_GOOGLE_INDEXING_ENABLED => Some("true".into()),
			ENV_GOOGLE_CREDENTIALS_BASE64 => Some("e30=".into()),
			_ => None,
		});

		assert_eq!(options.index_now_key(), Some("env-key"));
		assert_eq!(options.google_credentials(), Some("e30="));
	}

	#[test]
	fn debug_hides_credentials() {
		let options = NotifyOptions::default().with_google_credentials_base64("c2VjcmV0");

		assert!(!format!("{options:?}").contains("c2VjcmV0"));
	}
}
