//! OAuth 2.0 JWT-bearer token exchange (RFC 7523) for service accounts.

// self
use crate::{
	_prelude::*,
	auth::{AssertionClaims, BearerToken, ServiceAccountCredential, sign_assertion},
	error::{TokenError, TransportResultExt},
	http::{ReqwestHttpClient, ResponseSummary},
};

/// `grant_type` value identifying the JWT-bearer assertion grant.
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

const TARGET: &str = "the token endpoint";

#[derive(Deserialize)]
struct TokenResponse {
	access_token: Option<BearerToken>,
}

/// Trades a freshly signed assertion for a bearer token.
///
/// Every call signs a new assertion and performs a new exchange; tokens are not cached.
#[derive(Clone, Debug)]
pub struct TokenExchanger {
	http_client: Arc<ReqwestHttpClient>,
	default_endpoint: Url,
}
impl TokenExchanger {
	/// Creates an exchanger that falls back to `default_endpoint` when the credential has none.
	pub fn new(http_client: impl Into<Arc<ReqwestHttpClient>>, default_endpoint: Url) -> Self {
		Self { http_client: http_client.into(), default_endpoint }
	}

	/// Signs an indexing-scope assertion for `credential` and exchanges it for a bearer token.
	///
	/// A non-success status fails with [`TokenError::Rejected`] carrying the status and a bounded
	/// body preview; the body is not assumed to be JSON. A success body without `access_token`
	/// fails with [`TokenError::MissingAccessToken`].
	pub async fn exchange(&self, credential: &ServiceAccountCredential) -> Result<BearerToken> {
		let endpoint = credential.token_endpoint_or(&self.default_endpoint);
		let claims = AssertionClaims::indexing(&credential.client_email, endpoint);
		let assertion = sign_assertion(&claims, credential.private_key())?;
		let response = self
			.http_client
			.post(endpoint)
			.form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.expose())])
			.send()
			.await
			.or_transport(TARGET)?;
		let status = response.status();

		if !status.is_success() {
			let summary = ResponseSummary::read(response).await.or_transport(TARGET)?;

			return Err(TokenError::Rejected { status: summary.status, body: summary.body }.into());
		}

		let body = response.text().await.or_transport(TARGET)?;
		let de = &mut serde_json::Deserializer::from_str(&body);
		let parsed: TokenResponse = serde_path_to_error::deserialize(de)
			.map_err(|source| TokenError::ResponseParse { source, status: status.as_u16() })?;

		parsed
			.access_token
			.filter(|token| !token.expose().is_empty())
			.ok_or_else(|| TokenError::MissingAccessToken.into())
	}
}
