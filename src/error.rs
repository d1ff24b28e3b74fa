//! Notifier-level error types shared across the signer, token exchanger, and backend flows.

// self
use crate::_prelude::*;

/// Notifier-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical notifier error exposed by public APIs.
///
/// Backend flows never hand this to the caller of [`Notifier::notify`](crate::flows::Notifier);
/// it is folded into the backend's [`BackendResult`](crate::report::BackendResult) detail.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Service-account credential could not be decoded or is incomplete.
	#[error(transparent)]
	Credential(#[from] CredentialError),
	/// Identity assertion could not be signed.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Token endpoint rejected the exchange or answered with an unusable body.
	#[error(transparent)]
	Token(#[from] TokenError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised by the notifier.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// An endpoint URL cannot be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An endpoint URL does not use HTTP(S).
	#[error("The {endpoint} endpoint must be an http(s) URL: {url}.")]
	UnsupportedEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Failures raised while decoding a base64 service-account credential blob.
#[derive(Debug, ThisError)]
pub enum CredentialError {
	/// The blob is not valid base64.
	#[error("Invalid Google service account credentials: {0}")]
	Base64(#[from] base64::DecodeError),
	/// The decoded blob is not valid UTF-8.
	#[error("Invalid Google service account credentials: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
	/// The decoded blob is not a JSON object of the expected shape.
	#[error("Invalid Google service account credentials: {0}")]
	Json(#[from] serde_path_to_error::Error<serde_json::Error>),
	/// `client_email` or `private_key` is absent or empty.
	#[error("Service account is missing required fields")]
	MissingFields,
}

/// Failures raised while building the RS256 identity assertion.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// The PEM private key could not be parsed as PKCS#8 or PKCS#1.
	#[error("Service account private key is invalid: {message}.")]
	InvalidKey {
		/// Parser message from the last attempted encoding.
		message: String,
	},
	/// The assertion header or claims could not be serialized.
	#[error("Assertion could not be serialized.")]
	Serialize(#[from] serde_json::Error),
	/// The RSA primitive refused to sign.
	#[error("Assertion could not be signed: {0}.")]
	Rsa(#[from] rsa::signature::Error),
}

/// Token endpoint failures.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// Token endpoint answered with a non-success status.
	#[error("Token exchange failed with status {status}: {body}")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// Bounded preview of the response body.
		body: String,
	},
	/// Token endpoint responded with malformed JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON: {source}.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code.
		status: u16,
	},
	/// Token endpoint response omitted `access_token`.
	#[error("Token endpoint response is missing access_token.")]
	MissingAccessToken,
}

/// Transport-level failures (DNS, TCP, TLS, timeouts).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {target}: {source}")]
	Network {
		/// Label of the remote endpoint being called.
		target: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error raised while calling `target`.
	pub fn network(
		target: &'static str,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { target, source: Box::new(src) }
	}
}

/// Attaches an endpoint label to reqwest failures.
pub(crate) trait TransportResultExt<T> {
	/// Maps a [`ReqwestError`] into [`Error::Transport`] labelled with `target`.
	fn or_transport(self, target: &'static str) -> Result<T>;
}
impl<T> TransportResultExt<T> for std::result::Result<T, ReqwestError> {
	fn or_transport(self, target: &'static str) -> Result<T> {
		self.map_err(|e| TransportError::network(target, e).into())
	}
}
