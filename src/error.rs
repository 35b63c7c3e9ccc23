//! Error types and HTTP error response handling.
//!
//! Every failure path in the application funnels through [`AppError`], which
//! maps each variant to an HTTP status code and renders the flat JSON
//! envelope `{"error": "<message>"}` expected by API clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `AuthMissing` → 401 Unauthorized
/// - `AuthInvalid` → 403 Forbidden
/// - `TransactionNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An underlying query failed. The storage engine's message is passed
    /// through to the client unchanged.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// No bearer token was supplied on a protected endpoint.
    #[error("Authentication token required")]
    AuthMissing,

    /// The supplied token failed signature or expiry verification.
    #[error("Invalid or expired token")]
    AuthInvalid,

    /// No transaction matched the requested identifier.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// Request body or parameters are invalid. The string names the missing
    /// or malformed field.
    #[error("{0}")]
    InvalidRequest(String),
}

/// Convert an [`AppError`] into an HTTP response.
///
/// Handlers return `Result<T, AppError>` and axum renders the error arm via
/// this impl. All failures share the same body shape:
///
/// ```json
/// { "error": "Transaction not found" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AuthMissing => StatusCode::UNAUTHORIZED,
            AppError::AuthInvalid => StatusCode::FORBIDDEN,
            AppError::TransactionNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
