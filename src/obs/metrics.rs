// self
use crate::{obs::NotifyOutcome, provider::NotificationTarget};

/// Records a backend outcome via the global metrics recorder (when enabled).
pub fn record_backend_outcome(target: NotificationTarget, outcome: NotifyOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"index_notifier_backend_total",
			"backend" => target.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (target, outcome);
	}
}
