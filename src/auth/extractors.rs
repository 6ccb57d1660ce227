//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::context;
use crate::common::{safe_email_log, AppState, AuthError};

/// Verified caller identity, recovered entirely from the bearer token.
///
/// No storage round-trip happens here: a valid signature inside the validity
/// window is the whole session.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub picture: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state): Extension<Arc<AppState>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthError::Config("missing app state".to_string()))?;

        let token = match context::extract(&parts.extensions) {
            Ok(token) => token,
            Err(e) => {
                warn!("Authentication failed: no bearer credential on request");
                return Err(e);
            }
        };

        let claims = app_state.tokens.verify(&token)?;

        debug!(
            user_id = claims.sub,
            email = %safe_email_log(&claims.email),
            "Authenticated request"
        );

        Ok(AuthedUser {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            picture: claims.picture,
        })
    }
}
