// src/analyzer/target.rs
// =============================================================================
// Turns whatever the user typed into an absolute URL we can fetch.
//
// Rules:
// - surrounding whitespace is ignored
// - an empty string is an error
// - no "http://" or "https://" prefix? we assume "https://"
// - the result must parse and must have a host
// =============================================================================

use url::Url;

use crate::error::{AnalyzeError, Result};

// Validates and normalizes a user-supplied URL
//
// Examples:
//   "example.com"            -> https://example.com/
//   "  http://example.com "  -> http://example.com/
//   "HTTPS://Example.com/a"  -> https://example.com/a
//   ""                       -> Err(EmptyUrl)
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::EmptyUrl);
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let invalid = || AnalyzeError::InvalidUrl {
        url: trimmed.to_string(),
    };

    let url = Url::parse(&candidate).map_err(|_| invalid())?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid()),
    }
}
