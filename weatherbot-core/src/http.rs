use anyhow::{Context, Result, bail};
use reqwest::{Client, IntoUrl, RequestBuilder};
use std::time::Duration;

/// Browser-like identification sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:78.0) Gecko/20100101 Firefox/78.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { user_agent: DEFAULT_USER_AGENT.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

/// Process-wide HTTP client.
///
/// Built once from [`HttpSettings`]; clones share the same connection pool and
/// headers, and there is no way to change either after construction.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        if settings.timeout.is_zero() {
            bail!("HTTP timeout must be greater than zero");
        }

        let inner = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { inner })
    }

    pub fn get<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.inner.get(url)
    }
}
