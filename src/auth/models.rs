//! Authentication data models

use serde::{Deserialize, Serialize};

/// Profile document from the Google userinfo endpoint.
///
/// Lives only for the duration of one login callback; the fields the
/// directory cares about are copied onto the user record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub locale: String,
}

/// Access token claims: the caller identity handlers trust once the
/// signature checks out. Validity is derived from `iat` plus a fixed
/// duration; no server-side session record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: i64,
    pub name: String,
    pub email: String,
    pub picture: String,
    pub iat: i64,
}

/// Refresh token claims. Carries only the user id so a leaked refresh token
/// exposes no profile data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: i64,
    pub iat: i64,
}
