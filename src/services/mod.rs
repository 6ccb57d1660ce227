//! External service clients

pub mod google;

use async_trait::async_trait;

use crate::auth::models::GoogleUserInfo;
use crate::common::AuthError;

/// The identity provider operations the login flow depends on.
///
/// `GoogleService` is the production implementation; tests substitute stubs.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider URL the browser is sent to for authentication, carrying the
    /// encoded redirect state.
    fn authorization_url(&self, state: &str) -> String;

    /// Exchange a one-time authorization code for a provider access token.
    /// Single attempt, no retry.
    async fn exchange_code(&self, code: &str) -> Result<String, AuthError>;

    /// Fetch and decode the profile document for a provider access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<GoogleUserInfo, AuthError>;
}

pub use google::GoogleService;
