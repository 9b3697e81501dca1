//! HTTP mapping for `TallyError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tally_core::error::TallyError;

/// Response-side wrapper; handlers return `Result<_, ApiError>` and `?` on core calls.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TallyError::Conflict(_) | TallyError::Overflow(_) => StatusCode::CONFLICT,
            TallyError::NotFound(_) => StatusCode::NOT_FOUND,
            TallyError::BadRequest(_) | TallyError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            TallyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "Message": self.0.to_string() }));
        (status, body).into_response()
    }
}
