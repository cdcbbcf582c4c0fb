//! One request/response cycle: validate the query, fetch, normalize.
//!
//! Each call to [`LookupController::lookup`] starts from [`LookupState::Idle`] and ends in
//! either `Success` or `Failed`. Nothing is retried. The controller does not cancel or
//! order concurrent lookups; callers that issue overlapping lookups decide which result
//! to show.

use thiserror::Error;
use tracing::debug;

use crate::{
    model::WeatherRecord,
    normalize::{NormalizeError, normalize},
    provider::{FetchError, WeatherProvider},
};

const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name!";
const NOT_FOUND_MESSAGE: &str = "City not found. Please try again!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("city query is empty")]
    EmptyQuery,

    #[error("city not found (upstream status {status})")]
    NotFound { status: u16 },

    #[error("malformed upstream payload: {0}")]
    MalformedPayload(#[from] NormalizeError),

    #[error("network error: {0}")]
    NetworkError(String),
}

impl LookupError {
    /// Text shown to the end user. Only an empty query gets its own wording.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => EMPTY_QUERY_MESSAGE,
            LookupError::NotFound { .. }
            | LookupError::MalformedPayload(_)
            | LookupError::NetworkError(_) => NOT_FOUND_MESSAGE,
        }
    }
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { status } => LookupError::NotFound { status },
            FetchError::Transport(msg) => LookupError::NetworkError(msg),
            FetchError::Decode(msg) => {
                LookupError::MalformedPayload(NormalizeError::Undecodable(msg))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Validating,
    Loading,
    Success(WeatherRecord),
    Failed(LookupError),
}

impl LookupState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LookupState::Success(_) | LookupState::Failed(_))
    }
}

#[derive(Debug)]
pub struct LookupController<P> {
    provider: P,
}

impl<P: WeatherProvider> LookupController<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn lookup(&self, city_query: &str) -> Result<WeatherRecord, LookupError> {
        self.lookup_observed(city_query, |_| {}).await
    }

    /// Like [`lookup`](Self::lookup), reporting every state entered to `observer`.
    pub async fn lookup_observed<F>(
        &self,
        city_query: &str,
        mut observer: F,
    ) -> Result<WeatherRecord, LookupError>
    where
        F: FnMut(&LookupState),
    {
        let mut enter = |state: LookupState| {
            debug!(?state, "lookup transition");
            observer(&state);
        };

        enter(LookupState::Idle);
        enter(LookupState::Validating);

        let query = city_query.trim();
        let outcome = if query.is_empty() {
            Err(LookupError::EmptyQuery)
        } else {
            enter(LookupState::Loading);
            self.fetch_and_normalize(query).await
        };

        let terminal = match &outcome {
            Ok(record) => LookupState::Success(record.clone()),
            Err(err) => LookupState::Failed(err.clone()),
        };
        enter(terminal);

        outcome
    }

    async fn fetch_and_normalize(&self, query: &str) -> Result<WeatherRecord, LookupError> {
        let payload = self.provider.fetch_weather(query).await?;
        Ok(normalize(&payload)?)
    }
}
