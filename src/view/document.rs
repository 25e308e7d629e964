use std::collections::BTreeMap;

use super::{Block, ElementId, View};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    value: String,
    markup: String,
}

/// In-memory element tree keyed by [`ElementId`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: BTreeMap<ElementId, Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of an input element, as typing into it would
    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.nodes.entry(id).or_default().value = value.into();
    }

    /// Value as a borrowed slice, for widgets that bind to it
    pub fn value_ref(&self, id: ElementId) -> &str {
        self.nodes.get(&id).map(|n| n.value.as_str()).unwrap_or("")
    }

    /// Current markup content of an element
    pub fn markup(&self, id: ElementId) -> &str {
        self.nodes.get(&id).map(|n| n.markup.as_str()).unwrap_or("")
    }
}

impl View for Document {
    fn value(&self, id: ElementId) -> String {
        self.value_ref(id).to_string()
    }

    fn set_content(&mut self, id: ElementId, markup: String) {
        self.nodes.entry(id).or_default().markup = markup;
    }

    fn clear(&mut self, id: ElementId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.markup.clear();
        }
    }

    fn append_block(&mut self, id: ElementId, block: Block) {
        self.nodes
            .entry(id)
            .or_default()
            .markup
            .push_str(&block.to_markup());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_reads_empty() {
        let doc = Document::new();
        assert_eq!(doc.value(ElementId::Sources), "");
        assert_eq!(doc.markup(ElementId::Summaries), "");
    }

    #[test]
    fn test_append_then_clear() {
        let mut doc = Document::new();
        doc.append_block(ElementId::Summaries, Block::new("summary", "a"));
        doc.append_block(ElementId::Summaries, Block::new("summary", "b"));
        assert_eq!(
            doc.markup(ElementId::Summaries),
            r#"<div class="summary">a</div><div class="summary">b</div>"#
        );

        doc.clear(ElementId::Summaries);
        assert_eq!(doc.markup(ElementId::Summaries), "");
    }

    #[test]
    fn test_set_content_keeps_value() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Question, "why?");
        doc.set_content(ElementId::Question, "<p>x</p>".to_string());
        assert_eq!(doc.value(ElementId::Question), "why?");
        assert_eq!(doc.markup(ElementId::Question), "<p>x</p>");
    }
}
