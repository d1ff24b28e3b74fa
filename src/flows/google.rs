//! Google Indexing API client: one authenticated publish call per URL.
//!
//! The API has no batch endpoint. After a single token exchange, URLs are published one at a
//! time, in order, so outbound load stays bounded and each failure is attributed to its URL.
//! A failed URL never stops the remaining ones; all failures are joined into one detail.

// self
use crate::{
	_prelude::*,
	auth::{BearerToken, ServiceAccountCredential},
	error::TransportResultExt,
	flows::common,
	http::{ReqwestHttpClient, ResponseSummary},
	oauth::TokenExchanger,
	report::{BackendResult, NO_VALID_URLS},
};

/// Notification type announcing new or changed content.
pub const URL_UPDATED: &str = "URL_UPDATED";

const TARGET: &str = "the Google Indexing API";

#[derive(Debug, Serialize)]
struct UrlNotification<'a> {
	url: &'a str,
	#[serde(rename = "type")]
	kind: &'static str,
}

/// Service-account authenticated publisher for the Google Indexing API.
#[derive(Clone, Debug)]
pub struct GoogleIndexingClient {
	http_client: Arc<ReqwestHttpClient>,
	exchanger: TokenExchanger,
	publish_endpoint: Url,
}
impl GoogleIndexingClient {
	/// Creates a client that authenticates through `exchanger` and publishes to
	/// `publish_endpoint`.
	pub fn new(
		http_client: impl Into<Arc<ReqwestHttpClient>>,
		exchanger: TokenExchanger,
		publish_endpoint: Url,
	) -> Self {
		Self { http_client: http_client.into(), exchanger, publish_endpoint }
	}

	/// Decodes the base64 key file in `credentials_base64` and publishes every URL.
	///
	/// Credential problems fail before any network call. A failed token exchange fails the whole
	/// run with the exchange error.
	pub async fn publish_all<I, S>(&self, urls: I, credentials_base64: &str) -> Result<BackendResult>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let credential = ServiceAccountCredential::from_base64(credentials_base64)?;

		self.publish_with(urls, &credential).await
	}

	/// Publishes every URL using an already decoded `credential`.
	pub async fn publish_with<I, S>(
		&self,
		urls: I,
		credential: &ServiceAccountCredential,
	) -> Result<BackendResult>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let urls = common::normalize_urls(urls);

		if urls.is_empty() {
			return Ok(BackendResult::failure(NO_VALID_URLS));
		}

		let token = self.exchanger.exchange(credential).await?;
		let mut failures = Vec::new();

		for url in &urls {
			if let Err(failure) = self.publish_one(&token, url).await {
				failures.push(failure);
			}
		}

		if failures.is_empty() {
			Ok(BackendResult::success())
		} else {
			Ok(BackendResult::failure(failures.join("; ")))
		}
	}

	async fn publish_one(&self, token: &BearerToken, url: &Url) -> Result<(), String> {
		let notification = UrlNotification { url: url.as_str(), kind: URL_UPDATED };
		let response = self
			.http_client
			.post(self.publish_endpoint.clone())
			.header(reqwest::header::AUTHORIZATION, token.authorization())
			.json(&notification)
			.send()
			.await
			.or_transport(TARGET)
			.map_err(|e| format!("Failed for {url}: {e}"))?;

		if response.status().is_success() {
			return Ok(());
		}

		match ResponseSummary::read(response).await.or_transport(TARGET) {
			Ok(summary) => Err(format!("Failed for {url}: {} {}", summary.status, summary.body)),
			Err(e) => Err(format!("Failed for {url}: {e}")),
		}
	}
}
