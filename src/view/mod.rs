//! Output surface abstraction
//!
//! The flows never touch a concrete widget tree. They read input values and
//! write markup through [`View`], addressed by the fixed set of [`ElementId`]s.
//! [`Document`] is the in-memory implementation shared by the window, the
//! terminal front end and the tests.

mod document;
pub mod markup;
pub mod text;

use std::fmt;

pub use document::Document;

/// Element identifiers treated as a fixed interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    /// Comma-delimited source list input
    Sources,
    /// Container for summary blocks
    Summaries,
    /// Article text input
    Article,
    /// Question input
    Question,
    /// Container for the chat answer
    ChatResponse,
}

impl ElementId {
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementId::Sources => "sources",
            ElementId::Summaries => "summaries",
            ElementId::Article => "article",
            ElementId::Question => "question",
            ElementId::ChatResponse => "chat-response",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classed `div` appended to a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub class: &'static str,
    pub inner: String,
}

impl Block {
    pub fn new(class: &'static str, inner: impl Into<String>) -> Self {
        Self {
            class,
            inner: inner.into(),
        }
    }

    pub fn to_markup(&self) -> String {
        format!("<div class=\"{}\">{}</div>", self.class, self.inner)
    }
}

/// Capability over the elements the flows read and write
pub trait View {
    /// Current value of an input element. Missing elements read as empty.
    fn value(&self, id: ElementId) -> String;

    /// Replace the element's content with `markup`
    fn set_content(&mut self, id: ElementId, markup: String);

    /// Remove all content from the element
    fn clear(&mut self, id: ElementId);

    /// Append a block after the element's existing content
    fn append_block(&mut self, id: ElementId, block: Block);
}
