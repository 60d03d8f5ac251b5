// src/config.rs
// =============================================================================
// Tunables for a PageAnalyzer.
//
// Every field has a sensible default (see `Default` below) so callers only
// override what they care about. The CLI maps its flags onto this struct.
// =============================================================================

use std::time::Duration;

/// How the login form detector decides whether a page has a login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FormDetection {
    /// Walk the DOM tree: a `<form>` with a password `<input>` inside it.
    #[default]
    Structural,
    /// Substring search for `<form` and `type="password"` anywhere in the markup.
    Textual,
}

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Timeout for the single GET of the target page
    pub page_timeout: Duration,
    /// Timeout for each HEAD liveness probe
    pub probe_timeout: Duration,
    /// Upper bound on probes in flight for one analysis call
    pub max_concurrent_probes: usize,
    /// How long a cached reachability answer stays valid (None = forever)
    pub cache_ttl: Option<Duration>,
    /// Maximum number of URLs the cache remembers before evicting the oldest
    pub cache_capacity: usize,
    pub user_agent: String,
    pub form_detection: FormDetection,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            page_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(3),
            max_concurrent_probes: 10,
            cache_ttl: Some(Duration::from_secs(600)),
            cache_capacity: 10_000,
            user_agent: format!("web-analyzer/{}", env!("CARGO_PKG_VERSION")),
            form_detection: FormDetection::Structural,
        }
    }
}

impl AnalyzerConfig {
    /// Concurrency bound clamped to at least one permit.
    ///
    /// A semaphore with zero permits would block every probe forever.
    pub fn probe_permits(&self) -> usize {
        self.max_concurrent_probes.max(1)
    }
}
