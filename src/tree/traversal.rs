//! Prefix arithmetic shared by the walker and the formatters.

/// Marker placed before every entry name.
pub const BRANCH: &str = "├── ";

/// Added to the prefix once per level of descent.
pub const CONTINUATION: &str = "│   ";

/// Calculate the prefix for the children of an entry drawn at `current_prefix`.
pub fn child_prefix(current_prefix: &str) -> String {
    format!("{}{}", current_prefix, CONTINUATION)
}

/// Render a single tree line, without the trailing newline.
pub fn format_line(prefix: &str, name: &str) -> String {
    format!("{}{}{}", prefix, BRANCH, name)
}
