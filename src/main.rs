//! Task Page Entry Point
//!
//! Client-side behavior for the server-rendered task list: optimistic
//! completion toggles, delete confirmation, filter autosubmit and priority
//! highlighting.

mod commands;
mod config;
mod context;
mod controller;
mod delete_guard;
mod diagnostics;
mod dom;
mod error;
mod filter;
mod models;
mod notifier;
mod priority;
mod token;
mod toggle;

#[cfg(test)]
mod testing;

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use config::PageConfig;
use context::PageContext;
use diagnostics::{ConsoleDiagnostics, Diagnostics};

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        let on_ready = Closure::<dyn FnMut()>::new(move || start(&ready_doc));
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        start(&document);
    }
}

fn start(document: &web_sys::Document) {
    let diagnostics: Rc<dyn Diagnostics> = Rc::new(ConsoleDiagnostics::default());
    let Some(body) = document.body() else {
        diagnostics.error("Document has no body; page controller not mounted");
        return;
    };

    let config = PageConfig::load(document, diagnostics.as_ref());
    let ctx = PageContext::for_document(document, config, diagnostics.clone());

    match controller::mount(&body, &ctx) {
        Ok(bindings) => bindings.keep_alive(),
        Err(e) => diagnostics.error(&format!(
            "Failed to mount page controller: {}",
            error::describe_js(&e)
        )),
    }
}
