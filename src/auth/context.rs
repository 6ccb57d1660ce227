//! Request-scoped bearer credential propagation
//!
//! The raw bearer string travels with the request as a typed extension
//! value. Handlers never see it directly; the `AuthedUser` extractor pulls
//! it back out and verifies it.

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, Extensions},
    middleware::Next,
    response::Response,
};

use crate::common::AuthError;

/// Key type for the stored bearer string. Being a private type, it cannot
/// collide with any unrelated extension value the way a plain string key
/// could.
#[derive(Clone)]
struct BearerToken(String);

/// Attach a bearer string to a request-scoped context.
pub fn attach(extensions: &mut Extensions, token: String) {
    extensions.insert(BearerToken(token));
}

/// Pull the attached bearer string back out; absent means the request never
/// presented a credential.
pub fn extract(extensions: &Extensions) -> Result<String, AuthError> {
    extensions
        .get::<BearerToken>()
        .map(|BearerToken(token)| token.clone())
        .ok_or(AuthError::NotAuthorized)
}

/// Router-level middleware copying the `Authorization` header value into
/// request extensions. Accepts the value with or without the `Bearer `
/// prefix.
pub async fn propagate_bearer(mut request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    if let Some(value) = header {
        let token = value.strip_prefix("Bearer ").unwrap_or(&value).to_string();
        attach(request.extensions_mut(), token);
    }

    next.run(request).await
}
