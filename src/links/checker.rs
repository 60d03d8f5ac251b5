// src/links/checker.rs
// =============================================================================
// This module classifies every link on a page as internal, external or
// inaccessible, probing the network only for URLs the cache doesn't know.
//
// How it works:
// 1. Malformed links are inaccessible right away (no request)
// 2. Cached URLs are classified from the cache (no request)
// 3. Everything else gets its own tokio task that:
//    - waits for a semaphore permit (at most N probes in flight)
//    - probes the URL and stores the answer in the cache
//    - sends its outcome down a channel
// 4. This function is the only reader of the channel and the only writer
//    of the LinkAnalysis. When every task has finished, every sender is gone,
//    the channel closes and we return the totals.
//
// The semaphore is created fresh for every call. Two pages analyzed at the
// same time each get their own N permits.
//
// Rust concepts:
// - Arc: shares the probe, cache and semaphore with spawned tasks
// - mpsc channels: many producers (probe tasks), one consumer (us)
// - Semaphore permits: dropped automatically when the task finishes
// =============================================================================

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};
use url::Url;

use super::cache::AccessibilityCache;
use super::probe::Probe;
use super::resolve::{same_host, ResolvedLink};

/// Link statistics for one page.
///
/// `internal + external + inaccessible == total`. The order of
/// `inaccessible_urls` is the order probes happened to finish in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkAnalysis {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    pub inaccessible: usize,
    #[serde(rename = "inaccessibleURLs", skip_serializing_if = "Vec::is_empty")]
    pub inaccessible_urls: Vec<String>,
}

impl LinkAnalysis {
    fn record(&mut self, outcome: LinkOutcome) {
        match outcome {
            LinkOutcome::Internal => self.internal += 1,
            LinkOutcome::External => self.external += 1,
            LinkOutcome::Inaccessible(url) => {
                self.inaccessible += 1;
                self.inaccessible_urls.push(url);
            }
        }
    }

    /// True when every link ended up in exactly one bucket.
    pub fn is_consistent(&self) -> bool {
        self.internal + self.external + self.inaccessible == self.total
    }
}

/// Final classification of a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Internal,
    External,
    /// Holds the raw href (malformed) or the absolute URL (failed probe)
    Inaccessible(String),
}

impl LinkOutcome {
    fn classify(base: &Url, url: &Url, accessible: bool) -> Self {
        if !accessible {
            LinkOutcome::Inaccessible(url.to_string())
        } else if same_host(base, url) {
            LinkOutcome::Internal
        } else {
            LinkOutcome::External
        }
    }
}

pub struct LinkChecker {
    probe: Arc<dyn Probe>,
    cache: Arc<dyn AccessibilityCache>,
    max_in_flight: usize,
}

impl LinkChecker {
    pub fn new(
        probe: Arc<dyn Probe>,
        cache: Arc<dyn AccessibilityCache>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            probe,
            cache,
            max_in_flight: max_in_flight.max(1),
        }
    }

    // Classifies all links of one page
    //
    // Parameters:
    //   base:  the page URL; decides internal vs external
    //   links: output of the resolver, one entry per extracted href
    //
    // Returns: LinkAnalysis with total = links.len()
    //
    // Never fails. An unreachable link is a result, not an error.
    pub async fn check(&self, base: &Url, links: Vec<ResolvedLink>) -> LinkAnalysis {
        let mut analysis = LinkAnalysis {
            total: links.len(),
            ..LinkAnalysis::default()
        };

        let base = Arc::new(base.clone());
        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let (tx, mut rx) = mpsc::unbounded_channel::<LinkOutcome>();

        let mut cache_hits = 0usize;
        let mut probes = 0usize;

        for link in links {
            let url = match link {
                ResolvedLink::Malformed(raw) => {
                    let _ = tx.send(LinkOutcome::Inaccessible(raw));
                    continue;
                }
                ResolvedLink::Absolute(url) => url,
            };

            if let Some(accessible) = self.cache.lookup(url.as_str()) {
                debug!(%url, accessible, "Cache hit");
                cache_hits += 1;
                let _ = tx.send(LinkOutcome::classify(&base, &url, accessible));
                continue;
            }

            probes += 1;
            let tx = tx.clone();
            let base = Arc::clone(&base);
            let semaphore = Arc::clone(&semaphore);
            let probe = Arc::clone(&self.probe);
            let cache = Arc::clone(&self.cache);

            tokio::spawn(async move {
                // Held until this task ends, freeing the slot for the next probe
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    let _ = tx.send(LinkOutcome::Inaccessible(url.to_string()));
                    return;
                };

                let accessible = probe.is_accessible(&url).await;
                cache.store(url.as_str(), accessible);

                let _ = tx.send(LinkOutcome::classify(&base, &url, accessible));
            });
        }

        // Only the spawned tasks hold senders now; recv() returns None once
        // the last of them has finished
        drop(tx);

        while let Some(outcome) = rx.recv().await {
            analysis.record(outcome);
        }

        if !analysis.is_consistent() {
            // Only possible if a probe task panicked before reporting
            warn!(
                total = analysis.total,
                internal = analysis.internal,
                external = analysis.external,
                inaccessible = analysis.inaccessible,
                "Some links were never classified"
            );
        }

        info!(
            base = %base,
            total = analysis.total,
            internal = analysis.internal,
            external = analysis.external,
            inaccessible = analysis.inaccessible,
            cache_hits,
            probes,
            "Link analysis complete"
        );

        analysis
    }
}
