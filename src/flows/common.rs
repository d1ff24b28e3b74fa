//! Shared helpers for backend flows (URL normalization, host and key-location derivation).

// self
use crate::_prelude::*;

/// Parses, filters, and deduplicates candidate page URLs, preserving first-seen order.
///
/// Only absolute `http`/`https` URLs with a host survive; duplicates are detected on the parsed serialization,
/// so `https://example.com` and `https://example.com/` collapse into one entry.
pub fn normalize_urls<I, S>(urls: I) -> Vec<Url>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut seen = HashSet::new();

	urls.into_iter()
		.filter_map(|raw| Url::parse(raw.as_ref()).ok())
		.filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
		.filter(|url| seen.insert(url.as_str().to_owned()))
		.collect()
}

/// Returns the URL authority as `host[:port]`, omitting the scheme's default port.
pub fn host_with_port(url: &Url) -> Option<String> {
	let host = url.host_str()?;

	Some(match url.port() {
		Some(port) => format!("{host}:{port}"),
		None => host.to_owned(),
	})
}

/// Key location served from the page's own origin: `<origin>/<key>.txt`.
pub fn origin_key_location(url: &Url, key: &str) -> String {
	format!("{}/{key}.txt", url.origin().ascii_serialization())
}
