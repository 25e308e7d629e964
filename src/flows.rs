//! The summary and chat flows
//!
//! Each flow is collect -> dispatch -> render. The steps are public so the
//! window can run the dispatch as a background task and apply the render
//! step when the result message arrives; the composed `async fn`s are what
//! the terminal front end and the tests call.

use crate::backend::api::NewsApi;
use crate::backend::types::{ChatAnswer, ChatQuery, SourceList, SummaryRecord};
use crate::error::Result;
use crate::view::markup::{self, RenderOptions};
use crate::view::{ElementId, View};

pub fn collect_sources(view: &impl View) -> SourceList {
    SourceList::parse(&view.value(ElementId::Sources))
}

pub fn collect_chat_query(view: &impl View) -> ChatQuery {
    ChatQuery {
        article: view.value(ElementId::Article),
        question: view.value(ElementId::Question),
    }
}

/// Clear the summaries container, then append one block per record in order
pub fn render_summaries(view: &mut impl View, records: &[SummaryRecord], options: RenderOptions) {
    view.clear(ElementId::Summaries);
    for record in records {
        view.append_block(ElementId::Summaries, markup::summary_block(record, options));
    }
}

/// Replace the chat response with a single paragraph
pub fn render_answer(view: &mut impl View, answer: &ChatAnswer, options: RenderOptions) {
    view.set_content(
        ElementId::ChatResponse,
        markup::answer_paragraph(&answer.answer, options),
    );
}

/// Summarize the sources typed into `sources` and render them into `summaries`.
///
/// Errors are returned untouched. The container is only cleared once a
/// response has been decoded, so a failed call leaves it as it was.
pub async fn fetch_summaries<V, A>(view: &mut V, api: &A, options: RenderOptions) -> Result<()>
where
    V: View,
    A: NewsApi + ?Sized,
{
    let sources = collect_sources(&*view);
    tracing::debug!("Requesting summaries for {} source(s)", sources.len());

    let records = api.summarize_news(&sources).await?;
    render_summaries(view, &records, options);

    tracing::info!("Rendered {} summaries", records.len());
    Ok(())
}

/// Ask the question in `question` about the text in `article` and show the answer
pub async fn chat_with_ai<V, A>(view: &mut V, api: &A, options: RenderOptions) -> Result<()>
where
    V: View,
    A: NewsApi + ?Sized,
{
    let query = collect_chat_query(&*view);
    tracing::debug!(
        "Asking about a {}-byte article: {:?}",
        query.article.len(),
        query.question
    );

    let answer = api.chat_with_news(&query).await?;
    render_answer(view, &answer, options);

    tracing::info!("Rendered chat answer");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::NewsClient;
    use crate::error::Error;
    use crate::view::Document;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend double returning canned replies. `None` behaves like a
    /// backend that answered with something that is not the expected JSON.
    #[derive(Default)]
    struct FakeApi {
        summaries: Option<Vec<SummaryRecord>>,
        answer: Option<String>,
        seen_sources: Mutex<Vec<SourceList>>,
        seen_queries: Mutex<Vec<ChatQuery>>,
    }

    fn malformed(endpoint: &'static str) -> Error {
        Error::Parse {
            endpoint,
            status: 200,
            source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
        }
    }

    #[async_trait]
    impl NewsApi for FakeApi {
        async fn summarize_news(&self, sources: &SourceList) -> Result<Vec<SummaryRecord>> {
            self.seen_sources.lock().unwrap().push(sources.clone());
            self.summaries.clone().ok_or_else(|| malformed("/summarize_news"))
        }

        async fn chat_with_news(&self, query: &ChatQuery) -> Result<ChatAnswer> {
            self.seen_queries.lock().unwrap().push(query.clone());
            self.answer
                .clone()
                .map(|answer| ChatAnswer { answer })
                .ok_or_else(|| malformed("/chat_with_news"))
        }
    }

    fn record(source: &str, summary: &str) -> SummaryRecord {
        SummaryRecord {
            source: source.to_string(),
            summary: summary.to_string(),
        }
    }

    fn dead_backend() -> NewsClient {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        NewsClient::new(&format!("http://{}", addr))
    }

    #[test]
    fn test_collect_sources_trims() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Sources, "a, b ,c");
        assert_eq!(collect_sources(&doc).as_slice(), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_fetch_summaries_replaces_prior_content() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Sources, "X");
        doc.set_content(ElementId::Summaries, "<p>stale</p>".to_string());
        let api = FakeApi {
            summaries: Some(vec![record("X", "Y")]),
            ..Default::default()
        };

        fetch_summaries(&mut doc, &api, RenderOptions::default())
            .await
            .unwrap();

        assert_eq!(
            doc.markup(ElementId::Summaries),
            r#"<div class="summary"><h3>X</h3><p>Y</p></div>"#
        );
        assert_eq!(api.seen_sources.lock().unwrap()[0].as_slice(), ["X"]);
    }

    #[tokio::test]
    async fn test_fetch_summaries_keeps_response_order() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Sources, "bbc, cnn");
        let api = FakeApi {
            summaries: Some(vec![record("cnn", "second first"), record("bbc", "then this")]),
            ..Default::default()
        };

        fetch_summaries(&mut doc, &api, RenderOptions::default())
            .await
            .unwrap();

        let markup = doc.markup(ElementId::Summaries);
        let cnn = markup.find("<h3>cnn</h3>").unwrap();
        let bbc = markup.find("<h3>bbc</h3>").unwrap();
        assert!(cnn < bbc);
        assert_eq!(markup.matches(r#"<div class="summary">"#).count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_summaries_empty_response_clears() {
        let mut doc = Document::new();
        doc.set_content(ElementId::Summaries, "<p>old</p>".to_string());
        let api = FakeApi {
            summaries: Some(Vec::new()),
            ..Default::default()
        };

        fetch_summaries(&mut doc, &api, RenderOptions::default())
            .await
            .unwrap();

        assert_eq!(doc.markup(ElementId::Summaries), "");
        assert_eq!(api.seen_sources.lock().unwrap()[0].as_slice(), [""]);
    }

    #[tokio::test]
    async fn test_chat_replaces_prior_answer() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Article, "The answer is forty-two.");
        doc.set_value(ElementId::Question, "What is the answer?");
        doc.set_content(ElementId::ChatResponse, "<p>old</p><p>older</p>".to_string());
        let api = FakeApi {
            answer: Some("42".to_string()),
            ..Default::default()
        };

        chat_with_ai(&mut doc, &api, RenderOptions::default())
            .await
            .unwrap();

        assert_eq!(doc.markup(ElementId::ChatResponse), "<p>42</p>");
        let queries = api.seen_queries.lock().unwrap();
        assert_eq!(queries[0].article, "The answer is forty-two.");
        assert_eq!(queries[0].question, "What is the answer?");
    }

    #[tokio::test]
    async fn test_flows_are_idempotent() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Sources, "a, b");
        let api = FakeApi {
            summaries: Some(vec![record("a", "1"), record("b", "2")]),
            answer: Some("same".to_string()),
            ..Default::default()
        };
        let options = RenderOptions::default();

        fetch_summaries(&mut doc, &api, options).await.unwrap();
        chat_with_ai(&mut doc, &api, options).await.unwrap();
        let first = doc.clone();

        fetch_summaries(&mut doc, &api, options).await.unwrap();
        chat_with_ai(&mut doc, &api, options).await.unwrap();

        assert_eq!(doc, first);
    }

    #[tokio::test]
    async fn test_malformed_response_leaves_view_untouched() {
        let mut doc = Document::new();
        doc.set_content(ElementId::Summaries, "<p>keep</p>".to_string());
        doc.set_content(ElementId::ChatResponse, "<p>keep too</p>".to_string());
        let before = doc.clone();
        let api = FakeApi::default();

        let err = fetch_summaries(&mut doc, &api, RenderOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        let err = chat_with_ai(&mut doc, &api, RenderOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let mut doc = Document::new();
        doc.set_value(ElementId::Sources, "bbc");
        doc.set_content(ElementId::Summaries, "<p>keep</p>".to_string());
        let before = doc.clone();

        let err = fetch_summaries(&mut doc, &dead_backend(), RenderOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Network { .. }));
        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_escape_option_reaches_markup() {
        let mut doc = Document::new();
        let api = FakeApi {
            answer: Some("<b>bold</b>".to_string()),
            ..Default::default()
        };

        chat_with_ai(&mut doc, &api, RenderOptions { escape_markup: true })
            .await
            .unwrap();

        assert_eq!(
            doc.markup(ElementId::ChatResponse),
            "<p>&lt;b&gt;bold&lt;/b&gt;</p>"
        );
    }
}
