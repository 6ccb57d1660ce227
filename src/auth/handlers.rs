//! Authentication handlers and the login orchestration

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::extractors::AuthedUser;
use super::state as redirect_state;
use super::tokens::TokenService;
use crate::common::{safe_email_log, safe_token_log, AppState, AuthError};
use crate::services::IdentityProvider;
use crate::users::UserDirectory;

/// Path that starts a login
pub const PATH_LOGIN: &str = "/auth/login";
/// Path the provider redirects back to with a code and state
pub const PATH_CALLBACK: &str = "/auth/google/callback";
/// Path shown when a login attempt fails
pub const PATH_ERROR: &str = "/auth/error";

#[derive(Deserialize)]
pub struct LoginParams {
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /auth/login
/// Encodes the optional `next` path into the state parameter and sends the
/// browser to the provider to authenticate.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<LoginParams>,
) -> Response {
    let state_param = redirect_state::encode(params.next.as_deref().unwrap_or("/"));
    let auth_url = state.google.authorization_url(&state_param);

    debug!(next = ?params.next, "Redirecting to identity provider");

    redirect_found(&auth_url)
}

/// GET /auth/google/callback
/// The provider sends the browser here once the user has authenticated and
/// consented. Runs the login orchestration and redirects to the frontend
/// with the token pair, or to the error path on any failure.
pub async fn google_callback(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Response {
    let code = match params.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => {
            warn!("Login callback arrived without an authorization code");
            return redirect_found(PATH_ERROR);
        }
    };
    let state_param = params.state.as_deref().unwrap_or("");

    match complete_login(
        &state.google,
        &state.directory,
        &state.tokens,
        &state.frontend_callback_url,
        code,
        state_param,
    )
    .await
    {
        Ok(redirect_url) => redirect_found(&redirect_url),
        Err(e) => {
            warn!(error = %e, "Login failed");
            redirect_found(PATH_ERROR)
        }
    }
}

/// GET /auth/error
pub async fn auth_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "Error logging in")
}

/// GET /api/me
/// Returns the caller's identity claims. Identity comes straight from the
/// verified token; storage is never consulted.
pub async fn me_handler(user: AuthedUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "user": {
            "id": user.id,
            "name": user.name,
            "email": user.email,
            "picture": user.picture,
        },
    }))
}

/// Runs the callback steps in order: exchange the code, fetch the profile,
/// resolve the user record by email (create-if-absent, else update), mint
/// both tokens, and build the frontend redirect URL.
///
/// Any error aborts the remaining steps. Directory mutations already
/// committed stay committed — they are idempotent and re-applied on the next
/// login.
pub async fn complete_login(
    provider: &dyn IdentityProvider,
    directory: &dyn UserDirectory,
    tokens: &TokenService,
    frontend_callback_url: &str,
    code: &str,
    state: &str,
) -> Result<String, AuthError> {
    let provider_token = provider.exchange_code(code).await?;
    let profile = provider.fetch_profile(&provider_token).await?;

    let now = Utc::now();
    let picture = (!profile.picture.is_empty()).then_some(profile.picture.as_str());

    let user = match directory.find_by_email(&profile.email).await? {
        Some(existing) => {
            directory
                .update_profile(existing.id, &profile.name, picture, now)
                .await?
        }
        None => {
            info!(
                email = %safe_email_log(&profile.email),
                "First login for this email, creating user record"
            );
            directory
                .create(&profile.name, &profile.email, picture)
                .await?
        }
    };

    let access_token = tokens.issue_access(user.id, &profile, now)?;
    let refresh_token = tokens.issue_refresh(user.id, now)?;

    info!(
        user_id = user.id,
        email = %safe_email_log(&user.email),
        access_token = %safe_token_log(&access_token),
        "Login complete, handing tokens to the frontend"
    );

    // Decode the provider-returned state and re-encode its sanitized path so
    // the value the frontend redirects through can never leave this host.
    let next = redirect_state::decode(state);

    Ok(format!(
        "{}?accessToken={}&refreshToken={}&state={}",
        frontend_callback_url,
        urlencoding::encode(&access_token),
        urlencoding::encode(&refresh_token),
        urlencoding::encode(&redirect_state::encode(&next)),
    ))
}

// Every redirect in the login flow is a 302 Found; axum's `Redirect`
// helpers emit 303/307/308.
fn redirect_found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
