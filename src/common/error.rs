// Error types shared across the auth core

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Closed error taxonomy for the login and token flows.
///
/// Callers match on this exhaustively; there is no catch-all variant.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token absent, tampered with, or otherwise unverifiable
    #[error("not authorized")]
    NotAuthorized,

    /// Signature verified but the validity window has passed
    #[error("access token is expired")]
    TokenExpired,

    /// Authorization-code exchange or profile fetch against the identity
    /// provider failed
    #[error("identity provider error: {0}")]
    Provider(String),

    /// Persistent-storage failure during user lookup/create/update
    #[error("user directory error: {0}")]
    Directory(#[from] sqlx::Error),

    /// Malformed or missing startup configuration. Fatal at startup: the
    /// process must not serve traffic in this state.
    #[error("configuration error: {0}")]
    Config(String),
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code) = match self {
            AuthError::NotAuthorized => (
                StatusCode::UNAUTHORIZED,
                "not authorized".to_string(),
                "NOT_AUTHORIZED",
            ),
            AuthError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "access token is expired".to_string(),
                "TOKEN_EXPIRED",
            ),
            AuthError::Provider(msg) => {
                error!(error = %msg, "Identity provider request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "identity provider request failed".to_string(),
                    "PROVIDER_ERROR",
                )
            }
            AuthError::Directory(e) => {
                error!(error = %e, "User directory error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "user directory operation failed".to_string(),
                    "DIRECTORY_ERROR",
                )
            }
            AuthError::Config(msg) => {
                error!(error = %msg, "Configuration error surfaced on a request path");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server misconfiguration".to_string(),
                    "CONFIG_ERROR",
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}
