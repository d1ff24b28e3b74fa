//! Transport primitives shared by the token exchanger and both notification backends.
//!
//! Every outbound call goes through [`ReqwestHttpClient`], which carries a per-request timeout so
//! a stalled search-engine endpoint cannot hold a publish workflow hostage. Failed responses are
//! condensed into a [`ResponseSummary`] whose body is bounded before it reaches error messages or
//! result details.

// std
use std::{ops::Deref, time::Duration as StdDuration};
// crates.io
use reqwest::Response;
// self
use crate::{_prelude::*, error::ConfigError};

/// Timeout applied to every request issued by the default client.
pub const DEFAULT_REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(10);
/// Maximum number of characters of a response body kept in errors and result details.
pub const BODY_PREVIEW_LIMIT: usize = 512;

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds a client with [`DEFAULT_REQUEST_TIMEOUT`].
	pub fn new() -> Result<Self> {
		Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
	}

	/// Builds a client whose requests fail after `timeout`.
	pub fn with_timeout(timeout: StdDuration) -> Result<Self> {
		let client =
			ReqwestClient::builder().timeout(timeout).build().map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Status and bounded body of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseSummary {
	/// HTTP status code.
	pub status: u16,
	/// Body preview, truncated to [`BODY_PREVIEW_LIMIT`] characters.
	pub body: String,
}
impl ResponseSummary {
	/// Consumes `response`, reading its body as text.
	pub async fn read(response: Response) -> std::result::Result<Self, ReqwestError> {
		let status = response.status().as_u16();
		let body = response.text().await?;

		Ok(Self { status, body: body_preview(&body) })
	}
}

/// Trims `body` and truncates it on a character boundary.
pub fn body_preview(body: &str) -> String {
	let body = body.trim();

	match body.char_indices().nth(BODY_PREVIEW_LIMIT) {
		Some((cut, _)) => format!("{}...", &body[..cut]),
		None => body.to_owned(),
	}
}
