//! Text helpers for rendering user and backend strings.

/// CSS selector for elements that handle their own clicks inside a tree row.
pub const INTERACTIVE_SELECTOR: &str = "input,textarea,button,a,label";

const INTERACTIVE_TAGS: [&str; 5] = ["input", "textarea", "button", "a", "label"];

/// Escapes `& < > " '` for safe inclusion in HTML text and attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escaped chat text with newlines turned into `<br>`.
#[must_use]
pub fn message_html(input: &str) -> String {
    escape_html(input).replace('\n', "<br>")
}

/// Whether a tag name belongs to an element that consumes clicks itself.
#[must_use]
pub fn is_interactive_tag(tag: &str) -> bool {
    INTERACTIVE_TAGS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(tag))
}

/// Trims a composer message; blank input yields `None`.
#[must_use]
pub fn normalize_message(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
