//! Markup builders for backend results

use super::Block;
use crate::backend::types::SummaryRecord;

/// CSS class of each summary block
pub const SUMMARY_CLASS: &str = "summary";

/// How backend-provided text is placed into markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replace markup-significant characters with entities.
    /// Off by default: text is inserted verbatim and interpreted as markup.
    pub escape_markup: bool,
}

impl RenderOptions {
    fn text<'a>(&self, raw: &'a str) -> std::borrow::Cow<'a, str> {
        if self.escape_markup {
            escape(raw).into()
        } else {
            raw.into()
        }
    }
}

/// Entity-encode `&`, `<`, `>`, `"` and `'`
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Heading with the source name followed by a paragraph with its summary
pub fn summary_block(record: &SummaryRecord, options: RenderOptions) -> Block {
    Block::new(
        SUMMARY_CLASS,
        format!(
            "<h3>{}</h3><p>{}</p>",
            options.text(&record.source),
            options.text(&record.summary)
        ),
    )
}

pub fn answer_paragraph(answer: &str, options: RenderOptions) -> String {
    format!("<p>{}</p>", options.text(answer))
}
