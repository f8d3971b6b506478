//! DOM Helpers
//!
//! Markup contract shared by the behaviors, typed queries, and listener
//! guards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget};

use crate::diagnostics::Diagnostics;
use crate::error::describe_js;

// ========================
// Markup Contract
// ========================

/// One rendered task row
pub const ITEM_SELECTOR: &str = ".list-group-item";
/// Completion checkbox; carries `data-task-id`
pub const TOGGLE_SELECTOR: &str = ".task-toggle";
pub const TASK_ID_ATTR: &str = "data-task-id";
/// Item marker for a completed task
pub const COMPLETED_CLASS: &str = "task-completed";
/// Label marker for a completed task
pub const STRIKE_CLASS: &str = "text-decoration-line-through";

// ========================
// Queries
// ========================

/// All descendants of `root` matching `selector` that are a `T`
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Event's current target as a `T`
pub fn current_target<T: JsCast>(event: &Event) -> Option<T> {
    event.current_target()?.dyn_into::<T>().ok()
}

/// Adds or removes `class` on `el`; a rejected class token is reported
pub fn set_class(el: &Element, class: &str, on: bool, diagnostics: &dyn Diagnostics) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        diagnostics.warn(&format!("Could not set class '{}': {}", class, describe_js(&e)));
    }
}

// ========================
// Subscriptions
// ========================

/// An attached event listener; detached when dropped
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
