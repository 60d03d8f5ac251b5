// src/scanner/mod.rs
// =============================================================================
// This module pulls the "cheap" facts out of a page's raw HTML.
//
// Submodules:
// - version: figures out which HTML version the page declares
// - tokens:  streams html5ever tokens to collect the title, heading counts
//            and raw href values in a single pass
//
// Nothing in here touches the network or builds a DOM tree. Malformed markup
// never produces an error; we just return whatever we managed to collect.
// =============================================================================

mod tokens;
mod version;

pub use tokens::{
    count_headings, extract_hrefs, extract_page_title, scan_page, HeadingCounts, PageScan,
    NO_TITLE_FOUND,
};
pub use version::{detect_html_version, HtmlVersion};
