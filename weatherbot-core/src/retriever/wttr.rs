use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use crate::http::HttpClient;

use super::{FetchOutcome, WeatherRetriever, classify};

pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in";

/// wttr.in one-line format: location, condition icon, temperature, wind.
pub const DEFAULT_FORMAT: &str = "4";

/// Weather lookups against a wttr.in compatible endpoint.
#[derive(Debug, Clone)]
pub struct WttrRetriever {
    http: HttpClient,
    base_url: Url,
    format: String,
}

impl WttrRetriever {
    pub fn new(http: HttpClient, base_url: &str, format: impl Into<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| anyhow!("Invalid weather URL '{base_url}': {e}"))?;

        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Weather URL '{base_url}' cannot carry a location path"));
        }

        Ok(Self { http, base_url, format: format.into() })
    }

    /// Base URL with the location appended as one percent-encoded segment.
    ///
    /// `None` for `.` and `..`, which URL normalization would swallow and turn
    /// into a request for the service root.
    fn location_url(&self, location: &str) -> Option<Url> {
        if matches!(location, "." | "..") {
            return None;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(location);
        }
        Some(url)
    }
}

#[async_trait]
impl WeatherRetriever for WttrRetriever {
    async fn fetch(&self, location: &str) -> FetchOutcome {
        let Some(url) = self.location_url(location) else {
            debug!("Location {location:?} is not a usable path segment");
            return FetchOutcome::NotFound;
        };
        debug!("Requesting weather from {url}");

        let res = match self.http.get(url).query(&[("format", self.format.as_str())]).send().await
        {
            Ok(res) => res,
            Err(e) => {
                warn!("Weather api request for {location} failed: {e}");
                return FetchOutcome::TransportError(None);
            }
        };

        let status = res.status();
        let body = match res.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read weather api response for {location}: {e}");
                return FetchOutcome::TransportError(None);
            }
        };

        let outcome = classify(status, body);
        match &outcome {
            FetchOutcome::TransportError(Some(status)) => {
                warn!("Weather api returned {}", status.as_u16())
            }
            FetchOutcome::NotFound => debug!("Weather api does not know {location}"),
            _ => {}
        }

        outcome
    }
}
