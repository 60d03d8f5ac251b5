// src/analyzer/mod.rs
// =============================================================================
// This module ties the whole pipeline together.
//
// Submodules:
// - target: validates the URL the user typed and fills in a missing scheme
// - page:   PageAnalyzer - fetches the page once and runs every extractor
// - report: AnalysisResult, the serializable summary handed back to callers
// =============================================================================

mod page;
mod report;
mod target;

pub use page::PageAnalyzer;
pub use report::AnalysisResult;
pub use target::normalize_url;
