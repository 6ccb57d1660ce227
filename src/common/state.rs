// Application state shared across all modules

use crate::auth::tokens::TokenService;
use crate::services::GoogleService;
use crate::users::SqliteUserDirectory;

/// Process-wide dependencies, constructed once at startup.
///
/// Handed to handlers as `Extension<Arc<AppState>>`. Nothing in here mutates
/// after construction; the pool inside the directory is the only shared I/O
/// handle.
pub struct AppState {
    pub tokens: TokenService,
    pub google: GoogleService,
    pub directory: SqliteUserDirectory,
    pub frontend_callback_url: String,
}
