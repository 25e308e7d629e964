//! Error types for backend calls, configuration and local I/O

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a readable response body
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The body arrived but did not decode into the expected shape
    #[error("unexpected response from {endpoint} (HTTP {status}): {source}")]
    Parse {
        endpoint: &'static str,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend process error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
