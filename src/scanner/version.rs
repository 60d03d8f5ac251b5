// src/scanner/version.rs
// =============================================================================
// Detects the HTML version a page declares.
//
// This is a plain substring search over the lower-cased document, checked in
// a fixed priority order. The order matters: broken pages sometimes carry
// several doctype-like strings, and the first rule that matches wins.
// =============================================================================

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlVersion {
    Html5,
    Xhtml10,
    Xhtml11,
    Html401,
    Html32,
    Html20,
    /// No known doctype marker was found
    Unknown,
}

// Priority order for detection: first match wins
const MARKERS: [(&str, HtmlVersion); 6] = [
    ("<!doctype html>", HtmlVersion::Html5),
    ("xhtml 1.0", HtmlVersion::Xhtml10),
    ("xhtml 1.1", HtmlVersion::Xhtml11),
    ("html 4.01", HtmlVersion::Html401),
    ("html 3.2", HtmlVersion::Html32),
    ("html 2.0", HtmlVersion::Html20),
];

impl HtmlVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "HTML5",
            HtmlVersion::Xhtml10 => "XHTML 1.0",
            HtmlVersion::Xhtml11 => "XHTML 1.1",
            HtmlVersion::Html401 => "HTML 4.01",
            HtmlVersion::Html32 => "HTML 3.2",
            HtmlVersion::Html20 => "HTML 2.0",
            HtmlVersion::Unknown => "Unknown or custom HTML version",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the human-readable label, e.g. "HTML 4.01"
impl Serialize for HtmlVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Detects the HTML version of a document
//
// Example:
//   "<!DOCTYPE html><html>..."                          -> HtmlVersion::Html5
//   "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\"" -> HtmlVersion::Html401
//   "<html>no doctype</html>"                           -> HtmlVersion::Unknown
pub fn detect_html_version(html: &str) -> HtmlVersion {
    let lower = html.to_lowercase();

    MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(*marker))
        .map(|(_, version)| *version)
        .unwrap_or(HtmlVersion::Unknown)
}
