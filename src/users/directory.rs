//! Narrow repository interface over the users table
//!
//! The auth core needs exactly three operations; everything else about user
//! storage stays behind this seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use super::models::User;
use crate::common::{safe_email_log, AuthError};

/// The three operations the login flow performs against persistent storage.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Exact-match lookup; email comparison is case-sensitive as stored.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Insert a new record from provider profile data. `joined` and
    /// `last_active` are both set to the insertion time.
    async fn create(
        &self,
        name: &str,
        email: &str,
        picture: Option<&str>,
    ) -> Result<User, AuthError>;

    /// Refresh profile fields on an existing record.
    async fn update_profile(
        &self,
        id: i64,
        name: &str,
        picture: Option<&str>,
        last_active: DateTime<Utc>,
    ) -> Result<User, AuthError>;
}

/// `UserDirectory` backed by the application's sqlite pool.
#[derive(Clone)]
pub struct SqliteUserDirectory {
    pool: SqlitePool,
}

impl SqliteUserDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for SqliteUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        debug!(
            email = %safe_email_log(email),
            found = user.is_some(),
            "User directory lookup"
        );

        Ok(user)
    }

    async fn create(
        &self,
        name: &str,
        email: &str,
        picture: Option<&str>,
    ) -> Result<User, AuthError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (name, email, picture, joined, last_active) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(picture)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        debug!(user_id = id, email = %safe_email_log(email), "Created user record");

        Ok(user)
    }

    async fn update_profile(
        &self,
        id: i64,
        name: &str,
        picture: Option<&str>,
        last_active: DateTime<Utc>,
    ) -> Result<User, AuthError> {
        sqlx::query("UPDATE users SET name = ?, picture = ?, last_active = ? WHERE id = ?")
            .bind(name)
            .bind(picture)
            .bind(last_active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        debug!(user_id = id, "Updated user profile");

        Ok(user)
    }
}
