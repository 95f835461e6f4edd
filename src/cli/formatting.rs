//! Console output for the submitter
//!
//! Output is JSON either way; a terminal additionally gets a one-line
//! header so a human can tell what they are looking at. Piped output
//! stays raw for tooling.

use serde_json::Value;
use std::cell::Cell;

thread_local! {
    /// Override for terminal detection in tests
    static FORCE_PLAIN_TEXT: Cell<bool> = Cell::new(false);
}

/// Force plain text output (for testing)
pub fn set_plain_text_mode(enabled: bool) {
    FORCE_PLAIN_TEXT.with(|f| f.set(enabled));
}

/// Check if we're in a TTY (terminal) or if output is piped/redirected
pub fn is_terminal() -> bool {
    if FORCE_PLAIN_TEXT.with(|f| f.get()) {
        return false;
    }

    // Use terminal_size as a proxy for TTY detection
    terminal_size::terminal_size().is_some()
}

/// Pretty-print a JSON value
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render a service response for the console: raw JSON when piped or
/// when machine-readable output was requested, a one-line header plus
/// the JSON on a terminal.
pub fn render_response(title: &str, value: &Value, json_only: bool) -> String {
    if json_only || !is_terminal() {
        return render_json(value);
    }
    format!("{}\n{}", title, render_json(value))
}
