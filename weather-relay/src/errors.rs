use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use weather_core::FetchError;

/// Failures the relay reports to its clients.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("City is required")]
    MissingCity,

    #[error("City not found")]
    NotFound,

    #[error("Server error")]
    Upstream(#[source] FetchError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingCity => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FetchError> for RelayError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { .. } => RelayError::NotFound,
            other => RelayError::Upstream(other),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_map_to_statuses() {
        assert_eq!(
            RelayError::from(FetchError::Status { status: 401 }).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RelayError::from(FetchError::Transport("dns".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::from(FetchError::Decode("eof".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(RelayError::MissingCity.to_string(), "City is required");
        assert_eq!(RelayError::NotFound.to_string(), "City not found");
        assert_eq!(
            RelayError::Upstream(FetchError::Transport("x".into())).to_string(),
            "Server error"
        );
    }
}
