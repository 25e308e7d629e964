//! Shared types for backend communication

use serde::{Deserialize, Serialize};

/// Ordered source identifiers taken from a comma-delimited input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceList(Vec<String>);

impl SourceList {
    /// Split on `,` and trim each piece. Empty pieces are kept.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(|s| s.trim().to_string()).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Body of `POST /summarize_news`
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest<'a> {
    pub sources: &'a SourceList,
}

/// One entry of the `/summarize_news` response array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub source: String,
    pub summary: String,
}

/// Body of `POST /chat_with_news`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    pub article: String,
    pub question: String,
}

/// Response of `/chat_with_news`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}
