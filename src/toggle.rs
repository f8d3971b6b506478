//! Toggle Handler
//!
//! Optimistic completion toggle. The checkbox already shows the user's choice
//! while the request is in flight; the response then confirms it or rolls it
//! back. Every change event issues its own request: nothing is cancelled or
//! de-duplicated, and responses are applied in the order they arrive.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::config::RevertPolicy;
use crate::context::PageContext;
use crate::diagnostics::Diagnostics;
use crate::dom::{
    current_target, query_all, set_class, Subscription, COMPLETED_CLASS, ITEM_SELECTOR,
    STRIKE_CLASS, TASK_ID_ATTR, TOGGLE_SELECTOR,
};
use crate::models::{Notice, TaskId};
use crate::token::resolve_token;

/// The part of the page one toggle touches
pub trait ToggleView {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
    /// Marks or unmarks the row and its label as completed
    fn set_completed(&self, completed: bool);
}

/// Checkbox plus its enclosing row and the label right after it
pub struct DomToggleView {
    checkbox: HtmlInputElement,
    item: Option<Element>,
    label: Option<Element>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl DomToggleView {
    pub fn new(checkbox: HtmlInputElement, diagnostics: Rc<dyn Diagnostics>) -> Self {
        let item = checkbox.closest(ITEM_SELECTOR).ok().flatten();
        let label = checkbox.next_element_sibling();
        Self {
            checkbox,
            item,
            label,
            diagnostics,
        }
    }

    pub fn task_id(&self) -> Option<TaskId> {
        TaskId::parse(self.checkbox.get_attribute(TASK_ID_ATTR))
    }
}

impl ToggleView for DomToggleView {
    fn is_checked(&self) -> bool {
        self.checkbox.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.checkbox.set_checked(checked);
    }

    fn set_completed(&self, completed: bool) {
        if let Some(item) = &self.item {
            set_class(item, COMPLETED_CLASS, completed, self.diagnostics.as_ref());
        }
        if let Some(label) = &self.label {
            set_class(label, STRIKE_CLASS, completed, self.diagnostics.as_ref());
        }
    }
}

/// One toggle round trip.
///
/// `requested` is the checked value at the moment the change event fired.
pub async fn run_toggle(ctx: &PageContext, view: &dyn ToggleView, task_id: &TaskId, requested: bool) {
    ctx.diagnostics.info(&format!("Toggling task: {}", task_id));
    let token = resolve_token(ctx.tokens.as_ref(), ctx.diagnostics.as_ref());

    match ctx.api.toggle(task_id, &token).await {
        Ok(result) => {
            ctx.diagnostics.info(&format!(
                "Toggle response for task {}: completed={}",
                task_id, result.completed
            ));
            view.set_completed(result.completed);
            view.set_checked(result.completed);

            let messages = &ctx.config.messages;
            let message = if result.completed {
                &messages.completed
            } else {
                &messages.activated
            };
            ctx.notifier.notify(Notice::success(message.as_str()));
        }
        Err(err) => {
            ctx.diagnostics
                .error(&format!("Toggle failed for task {}: {}", task_id, err));
            ctx.notifier
                .notify(Notice::danger(ctx.config.messages.toggle_failed.as_str()));

            let reverted = match ctx.config.revert_policy {
                RevertPolicy::RestorePrevious => !requested,
                RevertPolicy::InvertCurrent => !view.is_checked(),
            };
            view.set_checked(reverted);
        }
    }
}

/// Wires every task checkbox under `root`
pub fn bind(root: &Element, ctx: &PageContext) -> Result<Vec<Subscription>, JsValue> {
    query_all::<HtmlInputElement>(root, TOGGLE_SELECTOR)?
        .into_iter()
        .map(|checkbox| {
            let ctx = ctx.clone();
            Subscription::listen(&checkbox, "change", move |event| {
                let Some(checkbox) = current_target::<HtmlInputElement>(&event) else {
                    return;
                };
                let view = DomToggleView::new(checkbox, ctx.diagnostics.clone());
                let Some(task_id) = view.task_id() else {
                    ctx.diagnostics.warn("Task toggle without a task id; ignoring change");
                    return;
                };
                let requested = view.is_checked();
                let ctx = ctx.clone();
                spawn_local(async move {
                    run_toggle(&ctx, &view, &task_id, requested).await;
                });
            })
        })
        .collect()
}
