use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::error::HttpError;

impl IntoResponse for HttpError {
    /// Respond with the error's status code and a JSON body of the form
    /// `{"code", "status", "message"}`.
    ///
    /// Codes that cannot appear on an HTTP status line fall back to 500.
    /// A body serialization failure is surfaced by `Json` as a 500 instead
    /// of being dropped.
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = %self.code, message = %self.message, "responding with server error");
        }

        (status, Json(self)).into_response()
    }
}

/// Handler-level error type: either a structured status error to respond
/// with directly, or an opaque internal failure that becomes a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Http(#[from] HttpError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Http(err) => err.into_response(),
            Self::Internal(err) => {
                // Details stay in the logs, not in the response body.
                error!(error = %err, "unhandled internal error");
                HttpError::internal_server_error().into_response()
            }
        }
    }
}
