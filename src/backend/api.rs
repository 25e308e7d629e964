//! HTTP client for the news backend API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{ChatAnswer, ChatQuery, SourceList, SummarizeRequest, SummaryRecord};
use crate::error::{Error, Result};

pub const SUMMARIZE_ENDPOINT: &str = "/summarize_news";
pub const CHAT_ENDPOINT: &str = "/chat_with_news";

/// The two backend calls the flows depend on
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Summarize the latest news of each source
    async fn summarize_news(&self, sources: &SourceList) -> Result<Vec<SummaryRecord>>;

    /// Ask a question about an article
    async fn chat_with_news(&self, query: &ChatQuery) -> Result<ChatAnswer>;
}

/// Client for communicating with the FastAPI news backend
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
}

impl NewsClient {
    /// No request timeout is set; a call waits as long as the backend does.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// POST a JSON body and decode the JSON reply.
    ///
    /// The HTTP status is not checked before decoding: an error page that
    /// happens to match `T` is accepted, anything else becomes [`Error::Parse`]
    /// carrying the status.
    async fn post_json<B, T>(&self, endpoint: &'static str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| Error::Network { endpoint, source })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|source| Error::Network { endpoint, source })?;

        tracing::debug!("{} answered HTTP {} ({} bytes)", endpoint, status, text.len());

        serde_json::from_str(&text).map_err(|source| Error::Parse {
            endpoint,
            status,
            source,
        })
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn summarize_news(&self, sources: &SourceList) -> Result<Vec<SummaryRecord>> {
        self.post_json(SUMMARIZE_ENDPOINT, &SummarizeRequest { sources })
            .await
    }

    async fn chat_with_news(&self, query: &ChatQuery) -> Result<ChatAnswer> {
        self.post_json(CHAT_ENDPOINT, query).await
    }
}
