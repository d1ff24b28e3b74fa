// self
use crate::{_prelude::*, error::ConfigError};

/// IndexNow submission endpoint shared by participating search engines.
pub const INDEX_NOW_ENDPOINT: &str = "https://api.indexnow.org/indexnow";
/// Google OAuth 2.0 token endpoint used when the key file names none.
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
/// Google Indexing API publish endpoint.
pub const GOOGLE_PUBLISH_ENDPOINT: &str =
	"https://indexing.googleapis.com/v3/urlNotifications:publish";

/// Endpoint set used by the notifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// IndexNow endpoint; single URLs are submitted with GET, batches with POST.
	pub index_now: Url,
	/// Default token endpoint for the JWT-bearer exchange.
	pub google_token: Url,
	/// Google Indexing API publish endpoint.
	pub google_publish: Url,
}
impl ProviderEndpoints {
	/// Returns the public production endpoints.
	pub fn well_known() -> Result<Self> {
		Self::builder().build()
	}

	/// Creates a builder seeded with no overrides.
	pub fn builder() -> ProviderEndpointsBuilder {
		ProviderEndpointsBuilder::default()
	}
}

/// Builder for [`ProviderEndpoints`]; unset endpoints resolve to the well-known URLs.
#[derive(Clone, Debug, Default)]
pub struct ProviderEndpointsBuilder {
	/// IndexNow endpoint override.
	pub index_now: Option<Url>,
	/// Token endpoint override.
	pub google_token: Option<Url>,
	/// Publish endpoint override.
	pub google_publish: Option<Url>,
}
impl ProviderEndpointsBuilder {
	/// Overrides the IndexNow endpoint.
	pub fn index_now(mut self, url: Url) -> Self {
		self.index_now = Some(url);

		self
	}

	/// Overrides the default token endpoint.
	pub fn google_token(mut self, url: Url) -> Self {
		self.google_token = Some(url);

		self
	}

	/// Overrides the publish endpoint.
	pub fn google_publish(mut self, url: Url) -> Self {
		self.google_publish = Some(url);

		self
	}

	/// Resolves defaults and validates every endpoint.
	pub fn build(self) -> Result<ProviderEndpoints> {
		Ok(ProviderEndpoints {
			index_now: resolve("index_now", self.index_now, INDEX_NOW_ENDPOINT)?,
			google_token: resolve("google_token", self.google_token, GOOGLE_TOKEN_ENDPOINT)?,
			google_publish: resolve(
				"google_publish",
				self.google_publish,
				GOOGLE_PUBLISH_ENDPOINT,
			)?,
		})
	}
}

fn resolve(endpoint: &'static str, url: Option<Url>, default: &str) -> Result<Url> {
	let url = match url {
		Some(url) => url,
		None => Url::parse(default)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })?,
	};

	if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
		return Err(ConfigError::UnsupportedEndpoint { endpoint, url: url.to_string() }.into());
	}

	Ok(url)
}
