// src/services/google.rs
//! Google OAuth2 client: authorization URL, code exchange, profile fetch.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fs;
use std::time::Duration;
use tracing::{debug, error};

use super::IdentityProvider;
use crate::auth::models::GoogleUserInfo;
use crate::common::AuthError;

const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

fn default_auth_uri() -> String {
    "https://accounts.google.com/o/oauth2/auth".to_string()
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// OAuth client credentials as issued on the Google Developers Console
/// "Credentials" page.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

/// The credentials file wraps the client object under a `web` or
/// `installed` key depending on the application type.
#[derive(Deserialize)]
struct CredentialsFile {
    web: Option<OAuthClientCredentials>,
    installed: Option<OAuthClientCredentials>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Clone)]
pub struct GoogleService {
    credentials: OAuthClientCredentials,
    redirect_uri: String,
    client: Client,
}

impl GoogleService {
    /// Load the OAuth client configuration from the credentials JSON file.
    ///
    /// Any read or parse problem is a configuration error; callers treat it
    /// as fatal at startup.
    pub fn from_credentials_file(path: &str) -> Result<Self, AuthError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AuthError::Config(format!("could not read OAuth credentials file {}: {}", path, e))
        })?;

        let parsed: CredentialsFile = serde_json::from_str(&raw).map_err(|e| {
            AuthError::Config(format!("malformed OAuth credentials file {}: {}", path, e))
        })?;

        let credentials = parsed.web.or(parsed.installed).ok_or_else(|| {
            AuthError::Config(format!(
                "OAuth credentials file {} has neither a \"web\" nor an \"installed\" client",
                path
            ))
        })?;

        let redirect_uri = credentials
            .redirect_uris
            .first()
            .cloned()
            .ok_or_else(|| {
                AuthError::Config(format!(
                    "OAuth credentials file {} lists no redirect_uris",
                    path
                ))
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::Config(format!("could not build HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            redirect_uri,
            client,
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleService {
    fn authorization_url(&self, state: &str) -> String {
        // prompt=login forces re-authentication even with a live Google
        // session, so switching accounts stays possible.
        let auth_url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}&prompt=login",
            self.credentials.auth_uri,
            urlencoding::encode(&self.credentials.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode("profile email"),
            urlencoding::encode(state),
        );

        debug!("Built Google authorization URL");
        auth_url
    }

    async fn exchange_code(&self, code: &str) -> Result<String, AuthError> {
        let params = [
            ("code", code),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        debug!("Exchanging authorization code for a provider token");

        let response = self
            .client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("token exchange request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Token exchange failed");
            return Err(AuthError::Provider(format!(
                "token endpoint returned HTTP {}: {}",
                status, error_text
            )));
        }

        let token_response = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AuthError::Provider(format!("malformed token response: {}", e)))?;

        Ok(token_response.access_token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<GoogleUserInfo, AuthError> {
        debug!("Fetching user profile from the userinfo endpoint");

        let response = self
            .client
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("userinfo request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Userinfo fetch failed");
            return Err(AuthError::Provider(format!(
                "userinfo endpoint returned HTTP {}: {}",
                status, error_text
            )));
        }

        let profile = response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AuthError::Provider(format!("malformed userinfo document: {}", e)))?;

        Ok(profile)
    }
}
