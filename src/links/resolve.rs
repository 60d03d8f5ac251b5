// src/links/resolve.rs
// =============================================================================
// This module turns raw href values into absolute URLs.
//
// We use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs against the page URL, the way a browser does
//
// An href that can't be parsed even relative to the page is "malformed".
// Malformed links still count toward the page's link total, they are just
// reported as inaccessible right away without any network request.
// =============================================================================

use tracing::debug;
use url::Url;

/// What a raw href turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLink {
    /// The href could not be parsed; holds the raw text
    Malformed(String),
    /// Fully resolved URL, ready to be probed
    Absolute(Url),
}

// Resolves a possibly-relative href against the page URL
//
// Examples (base = "https://example.com/docs/page"):
//   "/about"              -> Absolute("https://example.com/about")
//   "intro"               -> Absolute("https://example.com/docs/intro")
//   "https://other.com"   -> Absolute("https://other.com/")
//   "http://[::1"         -> Malformed("http://[::1")
//
// `Url::join` handles both cases: an absolute href replaces the base,
// a relative one is merged into it.
pub fn resolve_link(base: &Url, href: &str) -> ResolvedLink {
    match base.join(href) {
        Ok(url) => ResolvedLink::Absolute(url),
        Err(e) => {
            debug!(href, error = %e, "Malformed link");
            ResolvedLink::Malformed(href.to_string())
        }
    }
}

pub fn resolve_links(base: &Url, hrefs: &[String]) -> Vec<ResolvedLink> {
    hrefs.iter().map(|href| resolve_link(base, href)).collect()
}

// True when `url` points at the same host as the page
//
// Exact comparison of the host string plus any explicit port. No "www."
// folding: www.example.com and example.com are different hosts.
pub fn same_host(base: &Url, url: &Url) -> bool {
    url.host_str() == base.host_str() && url.port() == base.port()
}
