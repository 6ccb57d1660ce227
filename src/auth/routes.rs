//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /auth/login` - start a login, redirecting to the provider
/// - `GET /auth/google/callback` - provider redirect target
/// - `GET /auth/error` - static failure notice
/// - `GET /api/me` - current identity claims from the bearer token
pub fn auth_routes() -> Router {
    Router::new()
        .route(handlers::PATH_LOGIN, get(handlers::login))
        .route(handlers::PATH_CALLBACK, get(handlers::google_callback))
        .route(handlers::PATH_ERROR, get(handlers::auth_error))
        .route("/api/me", get(handlers::me_handler))
}
