//! # Users Module
//!
//! The user directory: the persistent store of local user records the login
//! flow reconciles provider profiles against. Exposed as a narrow repository
//! trait so the auth core never touches storage directly.

pub mod directory;
pub mod models;

#[cfg(test)]
mod tests;

pub use directory::{SqliteUserDirectory, UserDirectory};
pub use models::User;
