//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homecare_domain::error::HomecareError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`HomecareError`] to an HTTP response with appropriate status code.
///
/// Every endpoint names its own `failure` message. It is the only thing a
/// client sees when the store fails; the cause goes to the log.
#[derive(Debug)]
pub struct ApiError {
    error: HomecareError,
    failure: &'static str,
}

impl ApiError {
    pub fn new(error: impl Into<HomecareError>, failure: &'static str) -> Self {
        Self {
            error: error.into(),
            failure,
        }
    }

    /// Adapter for `map_err`: tags an error with the endpoint's failure message.
    pub fn failed(failure: &'static str) -> impl FnOnce(HomecareError) -> Self {
        move |error| Self::new(error, failure)
    }

    #[must_use]
    pub fn error(&self) -> &HomecareError {
        &self.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.error {
            HomecareError::Validation(_) | HomecareError::Conflict(_) => {
                (StatusCode::BAD_REQUEST, self.error.to_string())
            }
            HomecareError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomecareError::Storage(err) => {
                tracing::error!(error = %err, failure = self.failure, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.failure.to_string())
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
