//! Demonstrates a publish step notifying IndexNow and the Google Indexing API about changed pages,
//! with both backends served by a local mock so the example runs offline.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use index_notifier::{
	config::NotifyOptions, flows::Notifier, http::ReqwestHttpClient, provider::ProviderEndpoints,
};

const SERVICE_ACCOUNT_KEY: &str = include_str!("../tests/fixtures/service_account_key.pem");

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let index_now_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/indexnow");
			then.status(202);
		})
		.await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":3599}",
			);
		})
		.await;
	let publish_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/urlNotifications:publish");
			then.status(200).body("{}");
		})
		.await;
	let endpoints = ProviderEndpoints::builder()
		.index_now(Url::parse(&server.url("/indexnow"))?)
		.google_token(Url::parse(&server.url("/token"))?)
		.google_publish(Url::parse(&server.url("/v3/urlNotifications:publish"))?)
		.build()?;
	let notifier = Notifier::with_http_client(endpoints, ReqwestHttpClient::new()?);
	let key_file = serde_json::json!({
		"type": "service_account",
		"client_email": "publisher@demo-project.iam.gserviceaccount.com",
		"private_key": SERVICE_ACCOUNT_KEY,
	});
	let options = NotifyOptions::default()
		.with_index_now_key("demo-indexnow-key")
		.with_google_indexing(true)
		.with_google_credentials_base64(STANDARD.encode(key_file.to_string()));
	let result = notifier
		.notify(
			[
				"https://example.com/articles/launch-recap",
				"https://example.com/events/spring-hackathon",
				"https://example.com/articles/launch-recap",
			],
			&options,
		)
		.await;

	println!("Notification result: {}.", serde_json::to_string_pretty(&result)?);

	index_now_mock.assert_async().await;
	token_mock.assert_async().await;
	publish_mock.assert_calls_async(2).await;

	Ok(())
}
