//! # Auth Module
//!
//! This module handles the federated login flow end to end:
//! - Google OAuth handshake (redirect out, callback in)
//! - JWT access/refresh token issuance and verification
//! - bearer-credential propagation and the AuthedUser extractor
//! - redirect-state encoding with open-redirect protection

pub mod context;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod tokens;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
