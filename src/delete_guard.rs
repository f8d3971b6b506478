//! Delete Guard
//!
//! Holds back delete form submissions until the user confirms. Declining
//! cancels the submit event; accepting leaves the browser's own submission
//! untouched.

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlFormElement};

use crate::context::PageContext;
use crate::dom::{current_target, query_all, Subscription};

/// Forms whose action points at a delete route
pub const DELETE_FORM_SELECTOR: &str = r#"form[action*="delete"]"#;
/// Per-form override of the prompt text
pub const CONFIRM_ATTR: &str = "data-confirm";

/// Blocking yes/no prompt
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`; a prompt that cannot be shown counts as "no"
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancel,
}

pub fn decide(confirm: &dyn Confirm, message: &str) -> SubmitDecision {
    if confirm.confirm(message) {
        SubmitDecision::Proceed
    } else {
        SubmitDecision::Cancel
    }
}

/// Prompt text: the form's own, unless blank
pub fn prompt_for<'a>(custom: Option<&'a str>, default: &'a str) -> &'a str {
    match custom {
        Some(text) if !text.trim().is_empty() => text,
        _ => default,
    }
}

pub fn bind(root: &Element, ctx: &PageContext) -> Result<Vec<Subscription>, JsValue> {
    query_all::<HtmlFormElement>(root, DELETE_FORM_SELECTOR)?
        .into_iter()
        .map(|form| {
            let ctx = ctx.clone();
            Subscription::listen(&form, "submit", move |event| {
                let custom = current_target::<Element>(&event)
                    .and_then(|form| form.get_attribute(CONFIRM_ATTR));
                let message = prompt_for(custom.as_deref(), &ctx.config.messages.confirm_delete);

                if decide(ctx.confirm.as_ref(), message) == SubmitDecision::Cancel {
                    event.prevent_default();
                    ctx.diagnostics.info("Delete cancelled by user");
                }
            })
        })
        .collect()
}
