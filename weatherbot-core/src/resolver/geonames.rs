use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{error::ResolveError, http::HttpClient};

use super::{LocationResolver, MatchExtractor, TableMatchExtractor};

pub const DEFAULT_SEARCH_URL: &str = "https://www.geonames.org/search.html";

/// Resolves place names through the geonames.org search page.
#[derive(Debug, Clone)]
pub struct GeonamesResolver {
    http: HttpClient,
    search_url: String,
    extractor: Arc<dyn MatchExtractor>,
}

impl GeonamesResolver {
    pub fn new(http: HttpClient, search_url: impl Into<String>) -> Self {
        Self {
            http,
            search_url: search_url.into(),
            extractor: Arc::new(TableMatchExtractor::default()),
        }
    }

    /// Replace the scraping strategy used on the results page.
    pub fn with_extractor(mut self, extractor: impl MatchExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    async fn search(&self, raw: &str) -> Result<String, ResolveError> {
        let res = self.http.get(self.search_url.as_str()).query(&[("q", raw)]).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(ResolveError::Status(status));
        }

        let body = res.text().await?;

        Ok(self.extractor.first_match(&body)?)
    }
}

#[async_trait]
impl LocationResolver for GeonamesResolver {
    async fn normalize(&self, raw: &str) -> Option<String> {
        match self.search(raw).await {
            Ok(name) => {
                debug!("Resolved location {raw:?} to {name:?}");
                Some(name)
            }
            Err(ResolveError::Status(status)) => {
                debug!("Location search for {raw:?} returned {status}");
                None
            }
            Err(err) => {
                warn!("Unable to normalize a location {raw}: {err}");
                None
            }
        }
    }
}
