//! Formatting utilities for console output.
//!
//! Keeps styling of headers, command names and errors consistent across
//! commands, and renders settings values in a compact form.

use serde_json::Value;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats argument placeholders with muted styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats warnings, e.g. a newer release being available
pub fn format_notice(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a settings value for a single console line.
///
/// Scalars print as JSON; lists print in full when short and as a count
/// otherwise, sections print their field count.
///
/// # Examples
///
/// ```
/// use slm::cli::formatting::format_json_value;
/// use serde_json::json;
///
/// assert_eq!(format_json_value(&json!("hello")), "\"hello\"");
/// assert_eq!(format_json_value(&json!(100)), "100");
/// assert_eq!(format_json_value(&json!(["a", "b"])), "[\"a\", \"b\"]");
/// ```
pub fn format_json_value(value: &Value) -> String {
    const MAX_INLINE_ITEMS: usize = 5;

    match value {
        Value::Array(items) if items.len() <= MAX_INLINE_ITEMS => {
            let items: Vec<String> = items.iter().map(format_json_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => format!("{{{} fields}}", map.len()),
        scalar => scalar.to_string(),
    }
}
