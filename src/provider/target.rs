// self
use crate::_prelude::*;

/// Backends notified by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTarget {
	/// Key-authenticated IndexNow push protocol (single GET or batched POST).
	IndexNow,
	/// Service-account authenticated Google Indexing API (one publish call per URL).
	Google,
}
impl NotificationTarget {
	/// Every target, in the order the orchestrator runs them.
	pub const ALL: [Self; 2] = [Self::IndexNow, Self::Google];

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			NotificationTarget::IndexNow => "index_now",
			NotificationTarget::Google => "google",
		}
	}
}
impl Display for NotificationTarget {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
