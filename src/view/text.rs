//! Markup to plain text for terminal and window display

/// Render `markup` as wrapped plain text. Falls back to the raw markup if it
/// cannot be rendered.
pub fn to_text(markup: &str, width: usize) -> String {
    if markup.is_empty() {
        return String::new();
    }
    html2text::from_read(markup.as_bytes(), width).unwrap_or_else(|e| {
        tracing::warn!("Could not render markup as text: {}", e);
        markup.to_string()
    })
}
