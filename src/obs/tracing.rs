// self
use crate::{_prelude::*, provider::NotificationTarget, report::BackendResult};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRun<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRun<F> = F;

/// A span builder used by backend runs.
#[derive(Clone, Debug)]
pub struct BackendSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl BackendSpan {
	/// Creates a new span tagged with the provided target + stage.
	pub fn new(target: NotificationTarget, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("index_notifier.backend", backend = target.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (target, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRun<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `warn` event for failed runs and a `debug` event for successful ones.
pub fn log_result(target: NotificationTarget, result: &BackendResult) {
	#[cfg(feature = "tracing")]
	{
		if result.is_ok() {
			tracing::debug!(backend = target.as_str(), status = result.status(), "backend notified");
		} else {
			tracing::warn!(
				backend = target.as_str(),
				status = result.status(),
				detail = result.detail().unwrap_or_default(),
				"backend notification failed"
			);
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (target, result);
	}
}

/// Emits a `debug` event for a backend that was skipped before any network call.
pub fn log_skipped(target: NotificationTarget, reason: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(backend = target.as_str(), reason, "backend skipped");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (target, reason);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn logging_helpers_accept_every_result_shape() {
		log_result(NotificationTarget::IndexNow, &BackendResult::success_with_status(200));
		log_result(NotificationTarget::Google, &BackendResult::failure("boom"));
		log_skipped(NotificationTarget::Google, "disabled");
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = BackendSpan::new(NotificationTarget::Google, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
