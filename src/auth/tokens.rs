//! JWT issuance and verification
//!
//! Both tokens are HS256-signed with the process-wide secret, loaded once at
//! startup. Verification is a pure function of the token string, the secret,
//! and the clock.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;

use super::models::{AccessClaims, GoogleUserInfo, RefreshClaims};
use crate::common::AuthError;

/// How long an access token stays valid after issuance.
pub const ACCESS_TOKEN_DURATION_SECS: i64 = 60 * 60;

/// Issues and verifies the token pair. Constructed once in `main` and passed
/// in explicitly wherever tokens are handled.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign an access token embedding the resolved user id and profile
    /// fields. Signing only fails on secret misconfiguration, which is a
    /// fatal-at-startup class of problem, hence `Config`.
    pub fn issue_access(
        &self,
        user_id: i64,
        profile: &GoogleUserInfo,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = AccessClaims {
            sub: user_id,
            name: profile.name.clone(),
            email: profile.email.clone(),
            picture: profile.picture.clone(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Config(format!("could not sign access token: {}", e)))
    }

    /// Sign a refresh token carrying only the user id. There is no
    /// redemption endpoint yet; clients hold this for a future token-refresh
    /// flow.
    pub fn issue_refresh(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = RefreshClaims {
            sub: user_id,
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Config(format!("could not sign refresh token: {}", e)))
    }

    /// Verify an access token against the current clock.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and validity window at an explicit instant.
    ///
    /// A token is valid while `now` is within `[iat, iat + duration)`.
    /// Signature problems are `NotAuthorized`; a good signature past the
    /// window is `TokenExpired`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, AuthError> {
        // Expiry comes from `iat` plus the fixed duration; the payload
        // carries no `exp` claim, so the default exp requirement is lifted.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let decoded = decode::<AccessClaims>(token, &self.decoding, &validation).map_err(|e| {
            warn!(error = %e, "Token validation failed");
            AuthError::NotAuthorized
        })?;

        if now.timestamp() >= decoded.claims.iat + ACCESS_TOKEN_DURATION_SECS {
            return Err(AuthError::TokenExpired);
        }

        Ok(decoded.claims)
    }
}
