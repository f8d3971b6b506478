//! Diagnostics
//!
//! Developer-facing log lines. Handlers never touch the console directly;
//! they get a `Diagnostics` sink from the page context.

use wasm_bindgen::JsValue;

/// Log line severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Sink for diagnostic lines
pub trait Diagnostics {
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// Writes prefixed lines to the browser console
pub struct ConsoleDiagnostics {
    prefix: &'static str,
}

impl ConsoleDiagnostics {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }
}

impl Default for ConsoleDiagnostics {
    fn default() -> Self {
        Self::new("[TaskPage]")
    }
}

impl Diagnostics for ConsoleDiagnostics {
    fn record(&self, level: Level, message: &str) {
        let line = JsValue::from(format!("{} {}", self.prefix, message));
        match level {
            Level::Info => web_sys::console::log_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Error => web_sys::console::error_1(&line),
        }
    }
}
