//! Notification orchestrator and the per-backend clients it drives.

pub mod common;
pub mod google;
pub mod index_now;

pub use common::*;
pub use google::*;
pub use index_now::*;

// self
use crate::{
	_prelude::*,
	config::NotifyOptions,
	http::ReqwestHttpClient,
	oauth::TokenExchanger,
	obs::{self, BackendSpan, NotifyOutcome},
	provider::{NotificationTarget, ProviderEndpoints},
	report::{BackendResult, GOOGLE_DISABLED, INDEX_NOW_NOT_CONFIGURED, NotificationResult},
};

/// Public entry point that notifies every configured backend about changed pages.
///
/// The notifier owns only the HTTP client and endpoint set; keys and credentials arrive with
/// each [`notify`](Self::notify) call, so one instance can serve any number of sites. Every run
/// performs its own token exchange.
#[derive(Clone)]
pub struct Notifier {
	/// HTTP client used for every outbound request.
	pub http_client: Arc<ReqwestHttpClient>,
	/// Endpoints for IndexNow and the Google Indexing API.
	pub endpoints: ProviderEndpoints,
}
impl Notifier {
	/// Creates a notifier for the production endpoints with the default request timeout.
	pub fn new() -> Result<Self> {
		Ok(Self::with_http_client(ProviderEndpoints::well_known()?, ReqwestHttpClient::new()?))
	}

	/// Creates a notifier that reuses the caller-provided transport and endpoints.
	pub fn with_http_client(
		endpoints: ProviderEndpoints,
		http_client: impl Into<Arc<ReqwestHttpClient>>,
	) -> Self {
		Self { http_client: http_client.into(), endpoints }
	}

	/// Builds the IndexNow client bound to this notifier's transport.
	pub fn index_now_client(&self) -> IndexNowClient {
		IndexNowClient::new(self.http_client.clone(), self.endpoints.index_now.clone())
	}

	/// Builds the Google Indexing API client bound to this notifier's transport.
	pub fn google_client(&self) -> GoogleIndexingClient {
		let exchanger =
			TokenExchanger::new(self.http_client.clone(), self.endpoints.google_token.clone());

		GoogleIndexingClient::new(
			self.http_client.clone(),
			exchanger,
			self.endpoints.google_publish.clone(),
		)
	}

	/// Notifies IndexNow and the Google Indexing API about `urls`.
	///
	/// URLs are normalized once so both backends see the same set. Each backend runs regardless
	/// of the other's outcome, and every failure (missing configuration, credential problems,
	/// transport errors, rejected requests) is folded into its field of the returned result.
	pub async fn notify<I, S>(&self, urls: I, options: &NotifyOptions) -> NotificationResult
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let urls = common::normalize_urls(urls);
		let index_now = self.run_index_now(&urls, options).await;
		let google = self.run_google(&urls, options).await;

		NotificationResult { index_now, google }
	}

	async fn run_index_now(&self, urls: &[Url], options: &NotifyOptions) -> BackendResult {
		const TARGET: NotificationTarget = NotificationTarget::IndexNow;

		let Some(key) = options.index_now_key() else {
			return skipped(TARGET, INDEX_NOW_NOT_CONFIGURED);
		};
		let key_location = options
			.index_now_key_location()
			.map(str::to_owned)
			.or_else(|| urls.first().map(|url| common::origin_key_location(url, key)));
		let client = self.index_now_client();
		let span = BackendSpan::new(TARGET, "submit");

		obs::record_backend_outcome(TARGET, NotifyOutcome::Attempt);

		let result = span
			.instrument(client.submit(urls.iter().map(Url::as_str), key, key_location.as_deref()))
			.await
			.unwrap_or_else(BackendResult::from);

		obs::record_result(TARGET, &result);

		result
	}

	async fn run_google(&self, urls: &[Url], options: &NotifyOptions) -> BackendResult {
		const TARGET: NotificationTarget = NotificationTarget::Google;

		let Some(credentials) = options.google_credentials() else {
			return skipped(TARGET, GOOGLE_DISABLED);
		};
		let client = self.google_client();
		let span = BackendSpan::new(TARGET, "publish");

		obs::record_backend_outcome(TARGET, NotifyOutcome::Attempt);

		let result = span
			.instrument(client.publish_all(urls.iter().map(Url::as_str), credentials))
			.await
			.unwrap_or_else(BackendResult::from);

		obs::record_result(TARGET, &result);

		result
	}
}
impl Debug for Notifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Notifier").field("endpoints", &self.endpoints).finish()
	}
}

fn skipped(target: NotificationTarget, detail: &'static str) -> BackendResult {
	obs::record_backend_outcome(target, NotifyOutcome::Skipped);
	obs::log_skipped(target, detail);

	BackendResult::failure(detail)
}
