//! Structured outcome returned by [`Notifier::notify`](crate::flows::Notifier::notify).
//!
//! Both backend fields are always populated. A successful [`BackendResult`] never carries a
//! detail, and a failed one always does, including the fixed sentinels for backends that are
//! not configured.

// self
use crate::{_prelude::*, provider::NotificationTarget};

/// Detail reported when no input URL survives normalization.
pub const NO_VALID_URLS: &str = "No valid URLs provided";
/// Detail reported when no IndexNow key is configured.
pub const INDEX_NOW_NOT_CONFIGURED: &str = "IndexNow key not configured";
/// Detail reported when Google notifications are disabled or lack credentials.
pub const GOOGLE_DISABLED: &str = "Google Indexing API disabled";

const UNKNOWN_FAILURE: &str = "Unknown failure";

/// Outcome of one backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackendResult {
	ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	status: Option<u16>,
	#[serde(skip_serializing_if = "Option::is_none")]
	detail: Option<String>,
}
impl BackendResult {
	/// Success without an HTTP status worth reporting.
	pub fn success() -> Self {
		Self { ok: true, status: None, detail: None }
	}

	/// Success acknowledged with `status`.
	pub fn success_with_status(status: u16) -> Self {
		Self { ok: true, status: Some(status), detail: None }
	}

	/// Failure explained by `detail`.
	pub fn failure(detail: impl Into<String>) -> Self {
		Self { ok: false, status: None, detail: Some(non_empty(detail.into())) }
	}

	/// Failure caused by a non-success HTTP response.
	pub fn http_failure(status: u16, detail: impl Into<String>) -> Self {
		Self { ok: false, status: Some(status), detail: Some(non_empty(detail.into())) }
	}

	/// Whether the backend accepted the notification.
	pub fn is_ok(&self) -> bool {
		self.ok
	}

	/// HTTP status reported by the backend, when one was observed.
	pub fn status(&self) -> Option<u16> {
		self.status
	}

	/// Failure explanation; always `Some` when [`is_ok`](Self::is_ok) is false.
	pub fn detail(&self) -> Option<&str> {
		self.detail.as_deref()
	}
}
impl From<Error> for BackendResult {
	fn from(err: Error) -> Self {
		Self::failure(err.to_string())
	}
}

/// Aggregated outcome of a notification run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
	/// IndexNow outcome.
	pub index_now: BackendResult,
	/// Google Indexing API outcome.
	pub google: BackendResult,
}
impl NotificationResult {
	/// Returns the outcome for `target`.
	pub fn get(&self, target: NotificationTarget) -> &BackendResult {
		match target {
			NotificationTarget::IndexNow => &self.index_now,
			NotificationTarget::Google => &self.google,
		}
	}

	/// Whether every backend succeeded.
	pub fn all_ok(&self) -> bool {
		NotificationTarget::ALL.iter().all(|target| self.get(*target).is_ok())
	}
}

fn non_empty(detail: String) -> String {
	if detail.trim().is_empty() { UNKNOWN_FAILURE.into() } else { detail }
}
