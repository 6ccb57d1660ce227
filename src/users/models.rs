//! User directory data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persistent user record, the identity anchor a login resolves to.
///
/// Created on first login for an email and only ever updated afterwards;
/// nothing in the auth core deletes rows.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub joined: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}
