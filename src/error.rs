//! Page Errors

use wasm_bindgen::{JsCast, JsValue};

/// Why a toggle request did not produce a usable result.
///
/// Every variant takes the same user-facing failure path; the distinction
/// only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// The request never produced a response
    Transport(String),
    /// The server answered with a non-2xx status
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body is not a toggle result
    Decode(String),
}

impl std::fmt::Display for ToggleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleError::Transport(msg) => write!(f, "Network error: {}", msg),
            ToggleError::Status { status, message: Some(msg) } => {
                write!(f, "HTTP {}: {}", status, msg)
            }
            ToggleError::Status { status, message: None } => write!(f, "HTTP {}", status),
            ToggleError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ToggleError {}

/// Renders a thrown JS value for a log line
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
