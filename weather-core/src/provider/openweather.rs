use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::{FetchError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherProviderBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherProviderBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenWeatherProvider> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(OpenWeatherProvider {
            api_key: self.api_key,
            base_url: self.base_url,
            http,
        })
    }
}

impl OpenWeatherProvider {
    pub fn builder(api_key: String) -> OpenWeatherProviderBuilder {
        OpenWeatherProviderBuilder {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn new(api_key: String) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_raw(&self, query: &str) -> Result<serde_json::Value, FetchError> {
        debug!(query, url = %self.base_url, "OpenWeather request");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(query, error = %e, "OpenWeather request failed");
                FetchError::Transport(e.to_string())
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!(
                query,
                status = status.as_u16(),
                body = %truncate_body(&body),
                "OpenWeather responded with non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
