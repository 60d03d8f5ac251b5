// src/lib.rs
// =============================================================================
// Library root for web-analyzer.
//
// The analysis pipeline lives here so that any front end (our CLI today,
// an HTTP service tomorrow) can call `PageAnalyzer::analyze()` and get back
// a serializable `AnalysisResult`.
//
// Modules, leaves first:
// - scanner:  streams HTML tokens for version / title / headings / hrefs
// - forms:    walks the DOM tree looking for a login form
// - links:    resolves hrefs, probes them, caches the answers
// - analyzer: fetches the page and glues everything together
// - config:   tunables (timeouts, concurrency, cache policy)
// - error:    the error type returned when an analysis fails
// =============================================================================

pub mod analyzer;
pub mod config;
pub mod error;
pub mod forms;
pub mod links;
pub mod scanner;

pub use analyzer::{normalize_url, AnalysisResult, PageAnalyzer};
pub use config::{AnalyzerConfig, FormDetection};
pub use error::{AnalyzeError, Result};
pub use links::{AccessibilityCache, LinkAnalysis, LinkCache, Probe};
pub use scanner::{HeadingCounts, HtmlVersion};
