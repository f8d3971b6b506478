//! Page Configuration
//!
//! Defaults match the server's markup and routes. A page can override any
//! field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="task-page-config">
//!   { "notice_timeout_ms": 5000, "revert_policy": "invert_current" }
//! </script>
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::diagnostics::Diagnostics;
use crate::models::TaskId;

/// Element id of the optional config block
pub const CONFIG_ELEMENT_ID: &str = "task-page-config";

/// Placeholder replaced by the task id in `toggle_path`
const ID_PLACEHOLDER: &str = "{id}";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// What a failed toggle does to its checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevertPolicy {
    /// Put back the value the checkbox had before the click
    #[default]
    RestorePrevious,
    /// Flip whatever the checkbox shows when the failure arrives
    InvertCurrent,
}

/// User-facing texts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub completed: String,
    pub activated: String,
    pub toggle_failed: String,
    pub confirm_delete: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            completed: "Task completed!".to_string(),
            activated: "Task activated!".to_string(),
            toggle_failed: "Failed to update task".to_string(),
            confirm_delete: "Are you sure you want to delete this task?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Toggle endpoint; must contain `{id}`
    pub toggle_path: String,
    /// Header carrying the anti-forgery token
    pub csrf_header: String,
    /// Auto-dismiss delay for notices
    pub notice_timeout_ms: u32,
    pub revert_policy: RevertPolicy,
    pub messages: Messages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toggle_path: "/tasks/{id}/toggle".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            notice_timeout_ms: 3000,
            revert_policy: RevertPolicy::default(),
            messages: Messages::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let config: PageConfig =
            serde_json::from_str(raw).map_err(|e| format!("Invalid page config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if !self.toggle_path.contains(ID_PLACEHOLDER) {
            return Err(format!(
                "Invalid page config: toggle_path {:?} has no {} placeholder",
                self.toggle_path, ID_PLACEHOLDER
            ));
        }
        if self.csrf_header.trim().is_empty() {
            return Err("Invalid page config: csrf_header is empty".to_string());
        }
        Ok(())
    }

    /// Resolves the config block's text, falling back to defaults
    pub fn load_from(raw: Option<String>, diagnostics: &dyn Diagnostics) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                diagnostics.error(&format!("{}; using defaults", e));
                Self::default()
            }
        }
    }

    /// Reads the config block from `document`
    pub fn load(document: &web_sys::Document, diagnostics: &dyn Diagnostics) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::load_from(raw, diagnostics)
    }

    pub fn toggle_url(&self, task_id: &TaskId) -> String {
        let encoded = utf8_percent_encode(task_id.as_str(), PATH_SEGMENT).to_string();
        self.toggle_path.replace(ID_PLACEHOLDER, &encoded)
    }
}
