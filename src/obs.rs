//! Optional observability helpers for notification runs.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `index_notifier.backend` with the `backend`
//!   (target) and `stage` (call site) fields, plus `warn` events for failures and `debug` events
//!   for skipped backends.
//! - Enable `metrics` to increment the `index_notifier_backend_total` counter for every
//!   attempt/success/failure/skip, labeled by `backend` + `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::{_prelude::*, provider::NotificationTarget, report::BackendResult};

/// Outcome labels recorded for each backend run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotifyOutcome {
	/// Entry to a backend client.
	Attempt,
	/// Backend accepted the notification.
	Success,
	/// Backend failed; the detail is folded into the result.
	Failure,
	/// Backend not configured or disabled; no network call was made.
	Skipped,
}
impl NotifyOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			NotifyOutcome::Attempt => "attempt",
			NotifyOutcome::Success => "success",
			NotifyOutcome::Failure => "failure",
			NotifyOutcome::Skipped => "skipped",
		}
	}
}
impl Display for NotifyOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the terminal outcome of a backend run as a metric and a log event.
pub fn record_result(target: NotificationTarget, result: &BackendResult) {
	let outcome = if result.is_ok() { NotifyOutcome::Success } else { NotifyOutcome::Failure };

	record_backend_outcome(target, outcome);
	log_result(target, result);
}
