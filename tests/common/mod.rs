//! Shared fixtures for integration tests: mock-backed notifiers and service-account blobs.

#![allow(dead_code)]

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use httpmock::MockServer;
// self
use index_notifier::{
	flows::Notifier,
	http::ReqwestHttpClient,
	provider::ProviderEndpoints,
	reqwest::Client,
	url::Url,
};

pub const SERVICE_ACCOUNT_KEY: &str = include_str!("../fixtures/service_account_key.pem");
pub const CLIENT_EMAIL: &str = "indexer@example-project.iam.gserviceaccount.com";
pub const INDEX_NOW_PATH: &str = "/indexnow";
pub const TOKEN_PATH: &str = "/token";
pub const PUBLISH_PATH: &str = "/v3/urlNotifications:publish";
pub const ACCESS_TOKEN: &str = "ya29.mock-access-token";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

pub fn mock_url(server: &MockServer, path: &str) -> Url {
	Url::parse(&server.url(path)).expect("Mock endpoint should parse successfully.")
}

/// Points every backend at `server`.
pub fn build_test_notifier(server: &MockServer) -> Notifier {
	let endpoints = ProviderEndpoints::builder()
		.index_now(mock_url(server, INDEX_NOW_PATH))
		.google_token(mock_url(server, TOKEN_PATH))
		.google_publish(mock_url(server, PUBLISH_PATH))
		.build()
		.expect("Mock endpoints should build successfully.");

	Notifier::with_http_client(endpoints, test_reqwest_http_client())
}

/// Base64 key file whose private key carries literal `\n` escapes, as env-transported keys do.
pub fn credentials_blob(token_uri: Option<&str>) -> String {
	let mut key_file = serde_json::json!({
		"type": "service_account",
		"project_id": "example-project",
		"client_email": CLIENT_EMAIL,
		"private_key": SERVICE_ACCOUNT_KEY.replace('\n', "\\n"),
	});

	if let Some(uri) = token_uri {
		key_file["token_uri"] = uri.into();
	}

	STANDARD.encode(key_file.to_string())
}

pub fn credentials_blob_without_private_key() -> String {
	STANDARD.encode(serde_json::json!({ "client_email": CLIENT_EMAIL }).to_string())
}

pub fn token_response_body() -> String {
	serde_json::json!({
		"access_token": ACCESS_TOKEN,
		"expires_in": 3599,
		"token_type": "Bearer",
	})
	.to_string()
}
