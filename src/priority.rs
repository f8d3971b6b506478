//! Priority Highlighter
//!
//! One pass at load: every task row whose badge carries a severity class
//! gets the matching row-level priority class. Badges are never modified.

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{query_all, ITEM_SELECTOR};

/// First badge inside a row that carries any severity class
pub const BADGE_SELECTOR: &str = ".badge.bg-danger, .badge.bg-warning, .badge.bg-success";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Checked in this order when a badge has several severity classes
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "bg-danger",
            Priority::Medium => "bg-warning",
            Priority::Low => "bg-success",
        }
    }

    pub fn item_class(self) -> &'static str {
        match self {
            Priority::High => "priority-high",
            Priority::Medium => "priority-medium",
            Priority::Low => "priority-low",
        }
    }

    /// Reads a badge's class list; anything without `badge` is not a badge
    pub fn from_badge_classes<'a, I>(classes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes: Vec<&str> = classes.into_iter().collect();
        if !classes.contains(&"badge") {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|p| classes.contains(&p.badge_class()))
    }
}

/// Adds priority classes under `root`; returns how many rows were marked
pub fn highlight(root: &Element) -> Result<usize, JsValue> {
    let mut marked = 0;
    for item in query_all::<Element>(root, ITEM_SELECTOR)? {
        let Some(badge) = item.query_selector(BADGE_SELECTOR)? else {
            continue;
        };
        let classes = badge.class_name();
        if let Some(priority) = Priority::from_badge_classes(classes.split_whitespace()) {
            item.class_list().add_1(priority.item_class())?;
            marked += 1;
        }
    }
    Ok(marked)
}
