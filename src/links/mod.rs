// src/links/mod.rs
// =============================================================================
// This module classifies the links found on a page.
//
// Submodules:
// - resolve: turns raw href strings into absolute URLs (or marks them malformed)
// - cache:   remembers which URLs were reachable, shared across analyses
// - probe:   sends the HEAD request that decides if a URL is reachable
// - checker: runs the probes with bounded concurrency and tallies the results
//
// Flow for one page:
//   raw hrefs -> resolve -> (cache hit? use it : probe + store) -> LinkAnalysis
// =============================================================================

mod cache;
mod checker;
mod probe;
mod resolve;

pub use cache::{AccessibilityCache, LinkCache};
pub use checker::{LinkAnalysis, LinkChecker, LinkOutcome};
pub use probe::{HttpProbe, Probe};
pub use resolve::{resolve_link, resolve_links, same_host, ResolvedLink};
