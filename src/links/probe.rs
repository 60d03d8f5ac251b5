// src/links/probe.rs
// =============================================================================
// This module decides whether a single URL is reachable.
//
// Key functionality:
// - Makes an HTTP HEAD request (lightweight, no body download)
// - Redirects are followed by reqwest itself; we only see the final status
// - Status >= 400, or any request error (timeout, DNS, TLS...), = unreachable
//
// The checker only knows the `Probe` trait, so tests can swap in a fake
// that counts calls or tracks concurrency without touching the network.
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A liveness check for one absolute URL.
///
/// Failures are never errors here: anything that goes wrong just means
/// the URL is not accessible.
pub trait Probe: Send + Sync {
    fn is_accessible<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, bool>;
}

/// Probes URLs with a HEAD request through a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl HttpProbe {
    // The client is shared with the page fetch (connection pooling);
    // the timeout applies to each probe on its own
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

impl Probe for HttpProbe {
    fn is_accessible<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, bool> {
        async move {
            let result = self
                .client
                .head(url.clone())
                .timeout(self.timeout)
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status();
                    let accessible = status.as_u16() < 400;
                    debug!(%url, status = status.as_u16(), accessible, "Probe finished");
                    accessible
                }
                Err(e) => {
                    debug!(%url, reason = failure_reason(&e), error = %e, "Probe failed");
                    false
                }
            }
        }
        .boxed()
    }
}

// Short label for why a probe request failed, for the logs
fn failure_reason(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_builder() {
        "unsupported URL"
    } else {
        "request error"
    }
}
