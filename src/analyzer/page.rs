// src/analyzer/page.rs
// =============================================================================
// PageAnalyzer: analyze one web page from start to finish.
//
// Steps for each call to analyze():
// 1. Normalize the target URL (adds https:// if missing)
// 2. GET the page once, with a timeout
//    - network error, status >= 400 or unreadable body = the whole analysis fails
// 3. Detect the HTML version (substring search)
// 4. Scan tokens for title, headings and raw hrefs
// 5. Resolve hrefs against the page URL
// 6. Classify links (cache first, HEAD probes for the rest)
// 7. Detect a login form
//
// One PageAnalyzer can run many analyses, even concurrently. They all share
// the same HTTP client (connection pooling) and the same accessibility cache.
// =============================================================================

use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use super::report::AnalysisResult;
use super::target::normalize_url;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, Result};
use crate::forms::detect_login_form;
use crate::links::{resolve_links, AccessibilityCache, HttpProbe, LinkCache, LinkChecker, Probe};
use crate::scanner::{detect_html_version, scan_page};

pub struct PageAnalyzer {
    client: Client,
    checker: LinkChecker,
    config: AnalyzerConfig,
}

impl PageAnalyzer {
    /// Analyzer with its own `LinkCache`, sized and aged per `config`.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let cache = Arc::new(LinkCache::from_config(&config));
        Self::with_cache(config, cache)
    }

    /// Analyzer that reads and fills an existing cache.
    pub fn with_cache(config: AnalyzerConfig, cache: Arc<dyn AccessibilityCache>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(AnalyzeError::Client)?;

        let probe = Arc::new(HttpProbe::new(client.clone(), config.probe_timeout));
        Ok(Self::with_parts(config, client, probe, cache))
    }

    /// Fully wired analyzer; every collaborator is supplied by the caller.
    pub fn with_parts(
        config: AnalyzerConfig,
        client: Client,
        probe: Arc<dyn Probe>,
        cache: Arc<dyn AccessibilityCache>,
    ) -> Self {
        let checker = LinkChecker::new(probe, cache, config.probe_permits());

        Self {
            client,
            checker,
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    // Analyzes a single page
    //
    // Parameters:
    //   target: URL as typed by the user ("example.com" is fine)
    //
    // Returns: the full AnalysisResult, or the reason the page itself
    //          could not be analyzed. Broken links never make this fail.
    pub async fn analyze(&self, target: &str) -> Result<AnalysisResult> {
        let url = normalize_url(target)?;
        info!(%url, "Starting web page analysis");

        let body = self.fetch_page(&url).await?;

        let html_version = detect_html_version(&body);
        let scan = scan_page(&body);
        let page_title = scan.page_title();
        debug!(%url, %html_version, title = %page_title, "Extracted page metadata");

        let resolved = resolve_links(&url, &scan.hrefs);
        let links = self.checker.check(&url, resolved).await;

        let contains_login_form = detect_login_form(&body, self.config.form_detection);

        let result = AnalysisResult {
            html_version,
            page_title,
            headings: scan.headings,
            links,
            contains_login_form,
        };

        info!(
            %url,
            links = result.links.total,
            inaccessible = result.links.inaccessible,
            login_form = result.contains_login_form,
            "Analysis finished"
        );
        Ok(result)
    }

    // Fetches the page body with a single GET
    async fn fetch_page(&self, url: &Url) -> Result<String> {
        debug!(%url, timeout = ?self.config.page_timeout, "Fetching page");

        let response = self
            .client
            .get(url.clone())
            .timeout(self.config.page_timeout)
            .send()
            .await
            .map_err(|source| {
                warn!(%url, error = %source, "Failed to fetch page");
                AnalyzeError::Fetch {
                    url: url.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            warn!(%url, status = status.as_u16(), "Page returned an error status");
            return Err(AnalyzeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| AnalyzeError::ReadBody {
                url: url.to_string(),
                source,
            })?;

        info!(%url, status = status.as_u16(), bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
