// src/scanner/tokens.rs
// =============================================================================
// This module streams HTML tokens and collects the page title, the heading
// counts and every raw `href` found on an `<a>` tag.
//
// We drive the html5ever tokenizer directly instead of building a DOM:
// - the tokenizer hands us one token at a time through the TokenSink trait
// - we never allocate a tree, we only keep the few things we care about
// - it never fails: broken markup just produces parse-error tokens, which
//   we log and skip
//
// One subtlety: a bare tokenizer does not know that `<script>` or `<style>`
// contents are raw text (normally the tree builder tells it). Without help,
// `document.write("<a href=...>")` inside a script would look like a link.
// So our sink switches the tokenizer into the right raw-text state itself.
//
// Rust concepts:
// - Traits: TokenSink is the callback interface html5ever calls into
// - Enums with data: TitleState tracks where we are in the title
// - Default derive: a fresh scan starts with every counter at zero
// =============================================================================

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use serde::Serialize;
use tracing::{debug, trace};

/// Returned as the page title when the document has no usable `<title>`.
pub const NO_TITLE_FOUND: &str = "No title found";

/// Number of `<h1>` .. `<h6>` start tags in a document.
///
/// All six counters always exist, so a page without any `<h4>` still
/// reports `"h4": 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    /// Bumps the counter for `tag`; returns false if `tag` is not a heading.
    pub fn increment(&mut self, tag: &str) -> bool {
        match self.counter_mut(tag) {
            Some(counter) => {
                *counter += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, tag: &str) -> Option<usize> {
        match tag {
            "h1" => Some(self.h1),
            "h2" => Some(self.h2),
            "h3" => Some(self.h3),
            "h4" => Some(self.h4),
            "h5" => Some(self.h5),
            "h6" => Some(self.h6),
            _ => None,
        }
    }

    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }

    fn counter_mut(&mut self, tag: &str) -> Option<&mut usize> {
        match tag {
            "h1" => Some(&mut self.h1),
            "h2" => Some(&mut self.h2),
            "h3" => Some(&mut self.h3),
            "h4" => Some(&mut self.h4),
            "h5" => Some(&mut self.h5),
            "h6" => Some(&mut self.h6),
            _ => None,
        }
    }
}

/// Everything a single token pass collects from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageScan {
    /// Trimmed text of the first non-empty `<title>`, if any
    pub title: Option<String>,
    pub headings: HeadingCounts,
    /// Non-empty `href` values of `<a>` tags, in document order, duplicates kept
    pub hrefs: Vec<String>,
}

impl PageScan {
    /// The title, or the "No title found" sentinel.
    pub fn page_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| NO_TITLE_FOUND.to_string())
    }
}

// Where we are with respect to the page title
#[derive(Debug, Default)]
enum TitleState {
    // Still looking for a <title> start tag
    #[default]
    Searching,
    // Just saw <title>; collecting the text run that follows it
    Reading(String),
    // Title captured, ignore any later <title> tags
    Done,
}

// The TokenSink html5ever feeds tokens into
#[derive(Debug, Default)]
struct ScanSink {
    scan: PageScan,
    title: TitleState,
}

impl ScanSink {
    // Called for every token before normal handling.
    // A text run directly after <title> ends at the first non-text token.
    fn settle_title(&mut self, token: &Token) {
        let TitleState::Reading(text) = &mut self.title else {
            return;
        };

        match token {
            Token::CharacterTokens(chunk) => text.push_str(chunk),
            // These don't interrupt the text run
            Token::NullCharacterToken | Token::ParseError(_) => {}
            _ => {
                if text.is_empty() {
                    // <title> wasn't followed by text; keep looking for another one
                    self.title = TitleState::Searching;
                } else {
                    self.scan.title = Some(text.trim().to_string());
                    self.title = TitleState::Done;
                }
            }
        }
    }

    fn start_tag(&mut self, tag: &Tag) -> TokenSinkResult<()> {
        let name: &str = &tag.name;

        match name {
            "title" => {
                if matches!(self.title, TitleState::Searching) {
                    self.title = TitleState::Reading(String::new());
                }
            }
            "a" => {
                let href = tag
                    .attrs
                    .iter()
                    .find(|attr| &*attr.name.local == "href")
                    .map(|attr| attr.value.to_string());

                // Missing or empty href: not a link at all
                match href {
                    Some(href) if !href.is_empty() => self.scan.hrefs.push(href),
                    _ => {}
                }
            }
            _ => {
                self.scan.headings.increment(name);
            }
        }

        raw_text_mode(name)
    }

    fn finish(mut self) -> PageScan {
        // A title whose text ran right up to the end of the input
        self.settle_title(&Token::EOFToken);
        self.scan
    }
}

// Tells the tokenizer how to read the content of elements whose content
// is not markup, the same way a browser's tree builder would
fn raw_text_mode(name: &str) -> TokenSinkResult<()> {
    match name {
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

impl TokenSink for ScanSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        self.settle_title(&token);

        match token {
            Token::TagToken(tag) if tag.kind == TagKind::StartTag => self.start_tag(&tag),
            Token::ParseError(reason) => {
                trace!(line = line_number, %reason, "HTML parse error, continuing");
                TokenSinkResult::Continue
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

// Runs one tokenizer pass over the document and returns everything we found
//
// Parameters:
//   html: the raw page markup
//
// Returns: PageScan with title, heading counts and raw hrefs
//
// This never fails. Truncated or malformed HTML simply yields whatever was
// collected before the input ran out.
pub fn scan_page(html: &str) -> PageScan {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(ScanSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let scan = tokenizer.sink.finish();
    debug!(
        title = scan.title.as_deref().unwrap_or(NO_TITLE_FOUND),
        headings = scan.headings.total(),
        hrefs = scan.hrefs.len(),
        "Finished token scan"
    );
    scan
}

/// Trimmed text of the first `<title>`, or [`NO_TITLE_FOUND`].
pub fn extract_page_title(html: &str) -> String {
    scan_page(html).page_title()
}

pub fn count_headings(html: &str) -> HeadingCounts {
    scan_page(html).headings
}

/// Raw `href` values of every `<a>` tag, in document order.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    scan_page(html).hrefs
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a tokenizer vs. a parser?
//    - A tokenizer turns text into a flat stream: start tag, text, end tag...
//    - A parser (tree builder) arranges those tokens into a nested tree
//    - For counting tags and grabbing the title, the flat stream is enough
//
// 2. What is `let ... else`?
//    - `let TitleState::Reading(text) = &mut self.title else { return; };`
//    - Binds `text` if the pattern matches, otherwise runs the else block
//    - The else block must leave the function (return, break, panic...)
//
// 3. Why `&*attr.name.local`?
//    - html5ever stores names as interned atoms (LocalName)
//    - `*` dereferences the atom to a `str`, `&` borrows it
//    - Then we can compare it with a plain "href" string literal
//
// 4. Why does the sink return TokenSinkResult?
//    - It's how the sink talks back to the tokenizer
//    - Continue = keep going; RawData(kind) = treat what follows as raw text
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <title>  Test Page  </title>
</head>
<body>
    <h1>Main Heading</h1>
    <h2>Sub Heading</h2>
    <a href="/">Home</a>
    <a href="http://example.com">External</a>
    <a>Broken</a>
    <form>
        <input type="text" name="user"/>
        <input type="password" name="pass"/>
    </form>
</body>
</html>
"#;

    #[test]
    fn test_scan_sample_page() {
        let scan = scan_page(SAMPLE_HTML);
        assert_eq!(scan.title.as_deref(), Some("Test Page"));
        assert_eq!(scan.headings.h1, 1);
        assert_eq!(scan.headings.h2, 1);
        assert_eq!(scan.hrefs, vec!["/", "http://example.com"]);
    }

    #[test]
    fn test_missing_title_returns_sentinel() {
        let html = "<html><body><h1>No head here</h1></body></html>";
        assert_eq!(extract_page_title(html), NO_TITLE_FOUND);
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<title>First</title><svg><title>Second</title></svg>";
        assert_eq!(extract_page_title(html), "First");
    }

    #[test]
    fn test_empty_title_keeps_searching() {
        let html = "<title></title><body><title>Later</title></body>";
        assert_eq!(extract_page_title(html), "Later");
    }

    #[test]
    fn test_title_entities_and_tags_as_text() {
        let html = "<title>Fish &amp; Chips <b>today</b></title>";
        assert_eq!(extract_page_title(html), "Fish & Chips <b>today</b>");
    }

    #[test]
    fn test_truncated_title_still_captured() {
        assert_eq!(extract_page_title("<html><title>Cut off"), "Cut off");
    }

    #[test]
    fn test_heading_counts_start_at_zero() {
        let counts = count_headings("<p>no headings</p>");
        assert_eq!(counts, HeadingCounts::default());
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert_eq!(counts.get(tag), Some(0));
        }
    }

    #[test]
    fn test_heading_counts_are_exact() {
        let html = "<H1>a</H1><h2>b</h2><h2>c</h2><h6>d</h6><h7>not a heading</h7><header>x</header>";
        let counts = count_headings(html);
        assert_eq!(counts.h1, 1);
        assert_eq!(counts.h2, 2);
        assert_eq!(counts.h3, 0);
        assert_eq!(counts.h6, 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("h7"), None);
    }

    #[test]
    fn test_hrefs_keep_order_and_duplicates() {
        let html = r#"
            <a href="/b">b</a>
            <a href="/a">a</a>
            <a href="/b">b again</a>
        "#;
        assert_eq!(extract_hrefs(html), vec!["/b", "/a", "/b"]);
    }

    #[test]
    fn test_missing_and_empty_href_are_skipped() {
        let html = r#"<a>none</a><a href="">empty</a><a name="x">anchor</a><a href="/ok">ok</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/ok"]);
    }

    #[test]
    fn test_only_anchor_hrefs_are_harvested() {
        let html = r#"<link href="/style.css"><area href="/map"><a href="/page">p</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/page"]);
    }

    #[test]
    fn test_script_contents_are_not_markup() {
        let html = r#"
            <script>document.write('<a href="/fake">x</a><h1>fake</h1>');</script>
            <style>h1 { color: red }</style>
            <a href="/real">real</a>
        "#;
        let scan = scan_page(html);
        assert_eq!(scan.hrefs, vec!["/real"]);
        assert_eq!(scan.headings.h1, 0);
    }

    #[test]
    fn test_malformed_markup_returns_partial_results() {
        let html = r#"<h1>ok</h1><a href="/one">one</a><div <<< <a href="/two"#;
        let scan = scan_page(html);
        assert_eq!(scan.headings.h1, 1);
        assert_eq!(scan.hrefs.first().map(String::as_str), Some("/one"));
        assert_eq!(scan.title, None);
    }

    #[test]
    fn test_empty_document() {
        let scan = scan_page("");
        assert_eq!(scan, PageScan::default());
        assert_eq!(scan.page_title(), NO_TITLE_FOUND);
    }
}
