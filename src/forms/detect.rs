// src/forms/detect.rs
// =============================================================================
// Login form detection.
//
// We use the `scraper` crate to build the DOM tree (html5ever's tree builder
// underneath), then walk it ourselves with an explicit stack instead of
// recursion. A page nested ten thousand <div>s deep can't blow our stack.
//
// Rust concepts:
// - Vec as a stack: push() and pop() give us depth-first order
// - Iterators: descendants() walks a subtree without recursion either
// - Pattern guards: `Some(kind) if ...` in a match arm
// =============================================================================

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::config::FormDetection;

// Detects a login form with the chosen strategy
pub fn detect_login_form(html: &str, strategy: FormDetection) -> bool {
    let found = match strategy {
        FormDetection::Structural => has_login_form_structural(html),
        FormDetection::Textual => has_login_form_textual(html),
    };

    debug!(?strategy, found, "Login form detection finished");
    found
}

// Structural detection: a <form> element with a password <input> inside it
//
// Walks the element tree depth-first. Each <form> we meet gets its subtree
// searched; the first hit ends the walk.
pub fn has_login_form_structural(html: &str) -> bool {
    let document = Html::parse_document(html);

    let mut stack = vec![document.root_element()];

    while let Some(element) = stack.pop() {
        if element.value().name() == "form" {
            if form_has_password_input(element) {
                return true;
            }
            // Anything inside this form was just searched
            continue;
        }

        // Push children in reverse so they pop in document order
        let children: Vec<ElementRef> = element.children().filter_map(ElementRef::wrap).collect();
        stack.extend(children.into_iter().rev());
    }

    false
}

// Searches a form's subtree for <input type="password">
fn form_has_password_input(form: ElementRef) -> bool {
    form.descendants()
        .filter_map(ElementRef::wrap)
        .any(|element| is_password_input(&element))
}

fn is_password_input(element: &ElementRef) -> bool {
    let value = element.value();
    if value.name() != "input" {
        return false;
    }

    match value.attr("type") {
        Some(kind) if kind.trim().eq_ignore_ascii_case("password") => true,
        _ => false,
    }
}

// Textual detection: both "<form" and type="password" appear somewhere
//
// Cheap, but it does not check nesting: a password field outside any form
// still counts. Only matches the double-quoted attribute spelling.
pub fn has_login_form_textual(html: &str) -> bool {
    let lower = html.to_lowercase();
    lower.contains("<form") && lower.contains(r#"type="password""#)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_PAGE: &str = r#"
        <html><body>
          <form action="/login" method="post">
            <div class="row">
              <label>User <input type="text" name="user"></label>
              <label>Pass <input type="password" name="pass"></label>
            </div>
          </form>
        </body></html>
    "#;

    #[test]
    fn test_structural_finds_nested_password_input() {
        assert!(has_login_form_structural(LOGIN_PAGE));
    }

    #[test]
    fn test_structural_requires_password_inside_form() {
        let html = r#"
            <form action="/search"><input type="text" name="q"></form>
            <input type="password" name="orphan">
        "#;
        assert!(!has_login_form_structural(html));
        // The substring heuristic can't tell the difference
        assert!(has_login_form_textual(html));
    }

    #[test]
    fn test_structural_is_case_insensitive_on_type() {
        let html = r#"<FORM><INPUT TYPE="PASSWORD" name="p"></FORM>"#;
        assert!(has_login_form_structural(html));
    }

    #[test]
    fn test_structural_accepts_unquoted_and_single_quoted_types() {
        assert!(has_login_form_structural("<form><input type=password></form>"));
        assert!(has_login_form_structural("<form><input type='password'></form>"));
        // The textual heuristic only knows the double-quoted spelling
        assert!(!has_login_form_textual("<form><input type=password></form>"));
    }

    #[test]
    fn test_no_form_at_all() {
        let html = "<html><body><p>Welcome</p></body></html>";
        assert!(!has_login_form_structural(html));
        assert!(!has_login_form_textual(html));
    }

    #[test]
    fn test_second_form_is_the_login_form() {
        let html = r#"
            <form id="newsletter"><input type="email"></form>
            <section><form id="login"><input type="password"></form></section>
        "#;
        assert!(has_login_form_structural(html));
    }

    #[test]
    fn test_deeply_nested_document_does_not_overflow() {
        let depth = 5_000;
        let mut html = String::new();
        for _ in 0..depth {
            html.push_str("<div>");
        }
        html.push_str(r#"<form><input type="password"></form>"#);
        for _ in 0..depth {
            html.push_str("</div>");
        }
        // html5ever may reshape absurdly deep trees, but the walk must finish
        let _ = has_login_form_structural(&html);
    }

    #[test]
    fn test_detect_login_form_dispatches_on_strategy() {
        let html = r#"<form></form><input type="password">"#;
        assert!(!detect_login_form(html, FormDetection::Structural));
        assert!(detect_login_form(html, FormDetection::Textual));
    }
}
