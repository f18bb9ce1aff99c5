use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;

pub mod wttr;

pub use wttr::WttrRetriever;

/// Result of a single weather lookup, before it is turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Provider-formatted report, exactly as received.
    Success(String),
    NotFound,
    /// Unexpected status, or `None` when no response arrived at all.
    TransportError(Option<StatusCode>),
}

/// Fetches a formatted weather report for a location.
#[async_trait]
pub trait WeatherRetriever: Send + Sync + Debug {
    async fn fetch(&self, location: &str) -> FetchOutcome;
}

/// Map a weather endpoint response to an outcome.
///
/// An empty success body counts as an upstream error so that callers never
/// end up with an empty reply.
pub fn classify(status: StatusCode, body: String) -> FetchOutcome {
    match status {
        StatusCode::OK if !body.is_empty() => FetchOutcome::Success(body),
        StatusCode::NOT_FOUND => FetchOutcome::NotFound,
        other => FetchOutcome::TransportError(Some(other)),
    }
}
