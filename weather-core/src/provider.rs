use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use thiserror::Error;

use crate::{Config, model::RawWeatherPayload, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Failure reported by a [`WeatherProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider answered with a non-success HTTP status.
    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    /// The provider could not be reached, or the body could not be read.
    #[error("upstream transport failure: {0}")]
    Transport(String),

    /// The body was not the JSON shape we expected.
    #[error("upstream body could not be decoded: {0}")]
    Decode(String),
}

/// Fetch collaborator: the only place that speaks HTTP to the upstream provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Run one query and return the upstream JSON body untouched.
    async fn fetch_raw(&self, query: &str) -> Result<serde_json::Value, FetchError>;

    /// Run one query and decode the body into a [`RawWeatherPayload`].
    async fn fetch_weather(&self, query: &str) -> Result<RawWeatherPayload, FetchError> {
        let body = self.fetch_raw(query).await?;
        serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn fetch_raw(&self, query: &str) -> Result<serde_json::Value, FetchError> {
        (**self).fetch_raw(query).await
    }

    async fn fetch_weather(&self, query: &str) -> Result<RawWeatherPayload, FetchError> {
        (**self).fetch_weather(query).await
    }
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Arc<T> {
    async fn fetch_raw(&self, query: &str) -> Result<serde_json::Value, FetchError> {
        (**self).fetch_raw(query).await
    }

    async fn fetch_weather(&self, query: &str) -> Result<RawWeatherPayload, FetchError> {
        (**self).fetch_weather(query).await
    }
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `weather configure` or set WEATHER_API_KEY."
        )
    })?;

    let provider = OpenWeatherProvider::builder(api_key.to_owned())
        .base_url(config.base_url())
        .timeout(config.timeout())
        .build()?;

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Canned(serde_json::Value);

    #[async_trait]
    impl WeatherProvider for Canned {
        async fn fetch_raw(&self, _query: &str) -> Result<serde_json::Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn fetch_weather_decodes_raw_body() {
        let provider = Canned(json!({
            "name": "Oslo",
            "main": {"temp": -1.2, "feels_like": -5.0, "humidity": 80},
            "wind": {"speed": 4.1},
            "weather": [{"main": "Snow", "description": "light snow"}]
        }));

        let payload = provider.fetch_weather("Oslo").await.expect("decodes");
        assert_eq!(payload.name.as_deref(), Some("Oslo"));
        assert_eq!(payload.wind.and_then(|w| w.speed), Some(4.1));
    }

    #[tokio::test]
    async fn fetch_weather_reports_decode_error_for_wrong_types() {
        let provider = Canned(json!({"name": 42}));

        let err = provider.fetch_weather("x").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }
}
