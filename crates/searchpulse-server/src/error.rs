//! HTTP mapping for `SearchPulseError` (non-streaming JSON handlers).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use searchpulse_core::error::{ClientCode, SearchPulseError};

/// Newtype so the core error can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub SearchPulseError);

impl From<SearchPulseError> for ApiError {
    fn from(e: SearchPulseError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Config | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
