// src/forms/mod.rs
// =============================================================================
// This module answers one question: does the page contain a login form?
//
// Two strategies are available (see `FormDetection` in config.rs):
// - structural (default): parse the page into a DOM tree and look for a
//   <form> element that has a password <input> somewhere inside it
// - textual: a quick substring check for "<form" and type="password"
//   anywhere in the markup, which does not care whether one is inside the other
// =============================================================================

mod detect;

pub use detect::{detect_login_form, has_login_form_structural, has_login_form_textual};
