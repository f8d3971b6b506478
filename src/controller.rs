//! Page Controller
//!
//! Wires the four behaviors onto a root element. Each behavior reads the
//! subtree once here; none of them depend on another.

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::context::PageContext;
use crate::dom::Subscription;
use crate::{delete_guard, filter, priority, toggle};

/// Listeners attached by `mount`; dropping detaches them
pub struct PageBindings {
    subscriptions: Vec<Subscription>,
    highlighted: usize,
}

impl PageBindings {
    /// Number of attached listeners
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Rows that received a priority class
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn dispose(self) {
        drop(self);
    }

    /// Leaks the listeners so they live as long as the page
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

pub fn mount(root: &Element, ctx: &PageContext) -> Result<PageBindings, JsValue> {
    let mut subscriptions = toggle::bind(root, ctx)?;
    subscriptions.extend(delete_guard::bind(root, ctx)?);
    subscriptions.extend(filter::bind(root, ctx)?);
    let highlighted = priority::highlight(root)?;

    ctx.diagnostics.info(&format!(
        "Page controller mounted: {} listeners, {} rows highlighted",
        subscriptions.len(),
        highlighted
    ));

    Ok(PageBindings {
        subscriptions,
        highlighted,
    })
}
