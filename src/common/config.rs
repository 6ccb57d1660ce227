// Process configuration, read once at startup

use std::env;

/// Environment-provided configuration.
///
/// Loaded a single time in `main` and never re-read; everything downstream
/// receives what it needs explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Symmetric secret used to sign and verify both tokens
    pub auth_secret: String,
    /// Path to the OAuth client credentials file from the Google Developers
    /// Console "Credentials" page
    pub oauth_config_path: String,
    /// Frontend endpoint that receives the token pair after a login
    pub frontend_callback_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://league_api.db".to_string());
        let auth_secret =
            env::var("ACCESS_SECRET").unwrap_or_else(|_| "replace_with_strong_secret".to_string());
        let oauth_config_path =
            env::var("OAUTH_CONFIG_PATH").unwrap_or_else(|_| "oauth-config.json".to_string());
        let frontend_callback_url = env::var("FRONTEND_CALLBACK_URL")
            .unwrap_or_else(|_| "http://localhost:3000/login-callback".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        AppConfig {
            database_url,
            auth_secret,
            oauth_config_path,
            frontend_callback_url,
            port,
        }
    }
}
