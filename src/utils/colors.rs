/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Row colors for marked riders (white text on green / red).
pub const SELECTED_ROW: &str = "\x1b[97;42m";
pub const FLAGGED_ROW: &str = "\x1b[97;41m";

/// Highlight used for the active buttons in the station list.
pub const ACTIVE: &str = "\x1b[97;44m";

/// Grey placeholder for empty values.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{placeholder}{RESET}")
    } else {
        value.to_string()
    }
}
