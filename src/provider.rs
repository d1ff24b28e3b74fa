//! Notification backends (targets) and the endpoint set they are reached at.
//!
//! `target` names the two backends for labels and result lookup; `endpoints` holds the
//! well-known URLs, overridable for tests or self-hosted IndexNow relays.

/// Well-known endpoint URLs and their builder.
pub mod endpoints;
/// Backend identifiers.
pub mod target;

pub use endpoints::*;
pub use target::*;
