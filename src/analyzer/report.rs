// src/analyzer/report.rs
// =============================================================================
// The summary of one analyzed page.
//
// Serialized field names are camelCase to match the JSON payload the
// analysis has always produced:
//   { "htmlVersion", "pageTitle", "headings", "links", "containsLoginForm" }
// =============================================================================

use serde::Serialize;

use crate::links::LinkAnalysis;
use crate::scanner::{HeadingCounts, HtmlVersion};

/// Result of analyzing one page. Built once, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub html_version: HtmlVersion,
    /// Page title, or "No title found"
    pub page_title: String,
    pub headings: HeadingCounts,
    pub links: LinkAnalysis,
    pub contains_login_form: bool,
}
