//! Filter Autosubmit
//!
//! Filter selects submit their form as soon as their value changes.

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlFormElement, HtmlSelectElement};

use crate::context::PageContext;
use crate::diagnostics::Diagnostics;
use crate::dom::{current_target, query_all, Subscription};
use crate::error::describe_js;

/// Selects marked for change-triggered submission
pub const FILTER_SELECT_SELECTOR: &str = "select[onchange]";

pub trait SubmitTarget {
    fn submit_form(&self) -> Result<(), String>;
}

impl SubmitTarget for HtmlFormElement {
    fn submit_form(&self) -> Result<(), String> {
        self.submit().map_err(|e| describe_js(&e))
    }
}

/// Submits `form` once; returns whether a submission went out
pub fn autosubmit(form: Option<&dyn SubmitTarget>, diagnostics: &dyn Diagnostics) -> bool {
    let Some(form) = form else {
        diagnostics.warn("Filter select has no owning form");
        return false;
    };
    match form.submit_form() {
        Ok(()) => true,
        Err(e) => {
            diagnostics.error(&format!("Filter submit failed: {}", e));
            false
        }
    }
}

pub fn bind(root: &Element, ctx: &PageContext) -> Result<Vec<Subscription>, JsValue> {
    query_all::<HtmlSelectElement>(root, FILTER_SELECT_SELECTOR)?
        .into_iter()
        .map(|select| {
            let diagnostics = ctx.diagnostics.clone();
            Subscription::listen(&select, "change", move |event| {
                let form = current_target::<HtmlSelectElement>(&event).and_then(|s| s.form());
                autosubmit(
                    form.as_ref().map(|f| f as &dyn SubmitTarget),
                    diagnostics.as_ref(),
                );
            })
        })
        .collect()
}
