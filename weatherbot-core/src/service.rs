//! Request pipeline: resolve the location, fetch the weather, render text.

use anyhow::Result;
use tracing::debug;

use crate::{
    config::Config,
    http::HttpClient,
    policy::ResolutionPolicy,
    report::Outcome,
    resolver::{GeonamesResolver, LocationResolver},
    retriever::{WeatherRetriever, WttrRetriever},
};

/// Answers weather requests.
///
/// Holds no per-request state, so one instance can be shared behind an `Arc`
/// by any number of concurrent tasks.
#[derive(Debug)]
pub struct WeatherService {
    resolver: Box<dyn LocationResolver>,
    retriever: Box<dyn WeatherRetriever>,
    policy: ResolutionPolicy,
    default_location: Option<String>,
}

impl WeatherService {
    pub fn new(
        resolver: Box<dyn LocationResolver>,
        retriever: Box<dyn WeatherRetriever>,
        policy: ResolutionPolicy,
    ) -> Self {
        Self { resolver, retriever, policy, default_location: None }
    }

    /// Build the service with a single HTTP client shared by both stages.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::new(&config.http_settings())?;

        let resolver = GeonamesResolver::new(http.clone(), config.endpoints.location_search.as_str());
        let retriever = WttrRetriever::new(
            http,
            &config.endpoints.weather,
            config.endpoints.weather_format.as_str(),
        )?;

        Ok(Self::new(Box::new(resolver), Box::new(retriever), config.resolution)
            .with_default_location(config.default_location().map(str::to_owned)))
    }

    /// Location to look up when a request arrives without any text.
    pub fn with_default_location(mut self, location: Option<String>) -> Self {
        self.default_location = location;
        self
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub fn default_location(&self) -> Option<&str> {
        self.default_location.as_deref()
    }

    /// Weather report text for `text`. Never empty.
    pub async fn get_weather(&self, text: &str) -> String {
        self.outcome(text).await.into_message()
    }

    pub async fn outcome(&self, text: &str) -> Outcome {
        let request = if text.trim().is_empty() {
            match self.default_location.as_deref() {
                Some(default) => default,
                None => return Outcome::InvalidLocation,
            }
        } else {
            text
        };

        let location = match self.policy {
            ResolutionPolicy::Skip => request.to_string(),
            ResolutionPolicy::Required => match self.resolver.normalize(request).await {
                Some(name) => name,
                None => return Outcome::InvalidLocation,
            },
            ResolutionPolicy::BestEffort => match self.resolver.normalize(request).await {
                Some(name) => name,
                None => {
                    debug!("Falling back to raw request {request:?}");
                    request.to_string()
                }
            },
        };

        self.retriever.fetch(&location).await.into()
    }
}
