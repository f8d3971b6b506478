//! Anti-forgery Token Resolver
//!
//! Looks the token up fresh on every call: first the page-level meta tag,
//! then a form input, then gives up with an empty string.

use wasm_bindgen::JsCast;

use crate::diagnostics::Diagnostics;

pub const META_SELECTOR: &str = r#"meta[name="csrf-token"]"#;
pub const INPUT_SELECTOR: &str = r#"input[name="csrf_token"]"#;

/// Where tokens can be found
pub trait TokenSource {
    /// `Some` whenever the meta tag exists; its `content` or empty
    fn meta_token(&self) -> Option<String>;
    /// `Some` whenever the input exists; its current value
    fn input_token(&self) -> Option<String>;
}

/// Token lookup against a live document
pub struct DocumentTokenSource {
    document: web_sys::Document,
}

impl DocumentTokenSource {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl TokenSource for DocumentTokenSource {
    fn meta_token(&self) -> Option<String> {
        let meta = self.document.query_selector(META_SELECTOR).ok().flatten()?;
        Some(meta.get_attribute("content").unwrap_or_default())
    }

    fn input_token(&self) -> Option<String> {
        let input = self.document.query_selector(INPUT_SELECTOR).ok().flatten()?;
        let input = input.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        Some(input.value())
    }
}

pub fn resolve_token(source: &dyn TokenSource, diagnostics: &dyn Diagnostics) -> String {
    if let Some(token) = source.meta_token() {
        return token;
    }
    if let Some(token) = source.input_token() {
        return token;
    }
    diagnostics.error("CSRF token not found");
    String::new()
}
