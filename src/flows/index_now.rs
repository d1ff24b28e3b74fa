//! IndexNow client: one GET for a single URL, one JSON POST for a batch.
//!
//! The protocol defines distinct request shapes for one and many URLs. A lone URL goes out as
//! `GET <endpoint>?url=..&key=..[&keyLocation=..]`; two or more are posted as
//! `{host, key, keyLocation, urlList}` where `host` comes from the first URL.

// self
use crate::{
	_prelude::*,
	error::TransportResultExt,
	flows::common,
	http::{ReqwestHttpClient, ResponseSummary},
	report::{BackendResult, NO_VALID_URLS},
};

const TARGET: &str = "the IndexNow endpoint";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSubmission<'a> {
	host: String,
	key: &'a str,
	key_location: String,
	url_list: Vec<&'a str>,
}

/// Key-authenticated IndexNow submitter.
#[derive(Clone, Debug)]
pub struct IndexNowClient {
	http_client: Arc<ReqwestHttpClient>,
	endpoint: Url,
}
impl IndexNowClient {
	/// Creates a client posting to `endpoint`.
	pub fn new(http_client: impl Into<Arc<ReqwestHttpClient>>, endpoint: Url) -> Self {
		Self { http_client: http_client.into(), endpoint }
	}

	/// Submits `urls` under `key`.
	///
	/// URLs are normalized first; when none survive, no request is made and the result carries
	/// the "No valid URLs provided" detail. Without an explicit `key_location`, batches advertise
	/// `https://<host>/<key>.txt` and single submissions omit the parameter.
	pub async fn submit<I, S>(
		&self,
		urls: I,
		key: &str,
		key_location: Option<&str>,
	) -> Result<BackendResult>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let urls = common::normalize_urls(urls);
		let request = match urls.as_slice() {
			[] => return Ok(BackendResult::failure(NO_VALID_URLS)),
			[url] => self.single_request(url, key, key_location),
			[first, ..] => {
				let Some(host) = common::host_with_port(first) else {
					return Ok(BackendResult::failure(NO_VALID_URLS));
				};
				let key_location = key_location
					.map(str::to_owned)
					.unwrap_or_else(|| format!("https://{host}/{key}.txt"));
				let submission = BatchSubmission {
					host,
					key,
					key_location,
					url_list: urls.iter().map(Url::as_str).collect(),
				};

				self.http_client.post(self.endpoint.clone()).json(&submission)
			},
		};
		let response = request.send().await.or_transport(TARGET)?;
		let status = response.status();

		if status.is_success() {
			return Ok(BackendResult::success_with_status(status.as_u16()));
		}

		let summary = ResponseSummary::read(response).await.or_transport(TARGET)?;
		let detail = if summary.body.is_empty() {
			format!("IndexNow request failed with status {}", summary.status)
		} else {
			summary.body
		};

		Ok(BackendResult::http_failure(summary.status, detail))
	}

	fn single_request(
		&self,
		url: &Url,
		key: &str,
		key_location: Option<&str>,
	) -> reqwest::RequestBuilder {
		let request =
			self.http_client.get(self.endpoint.clone()).query(&[("url", url.as_str()), ("key", key)]);

		match key_location {
			Some(location) => request.query(&[("keyLocation", location)]),
			None => request,
		}
	}
}
