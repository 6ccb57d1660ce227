//! Redirect-state codec
//!
//! The `next` path a caller wants to land on after login rides through the
//! provider round trip inside the opaque `state` parameter, as the
//! base64url encoding of a path. Anything that embeds a scheme or host is
//! reduced to its path component before use, and malformed input degrades
//! silently to `/` — no error ever reaches the caller.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode a redirect target as an opaque state value. The open-redirect
/// guard applies here too: only the path survives encoding.
pub fn encode(next: &str) -> String {
    URL_SAFE_NO_PAD.encode(sanitize_path(next))
}

/// Decode a provider-returned state value back to a safe path. Lenient:
/// values that are not valid base64 are sanitized as raw paths.
pub fn decode(state: &str) -> String {
    match URL_SAFE_NO_PAD.decode(state) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => sanitize_path(&decoded),
            Err(_) => "/".to_string(),
        },
        Err(_) => sanitize_path(state),
    }
}

/// Reduce a redirect target to a rooted path. `scheme://host` and
/// protocol-relative `//host` prefixes are stripped, as are query and
/// fragment, so the result can never point at a foreign host.
fn sanitize_path(raw: &str) -> String {
    // Query and fragment go first, so a `://` inside a query string cannot
    // be mistaken for a scheme
    let raw = raw.trim();
    let raw = raw.split(|c| c == '?' || c == '#').next().unwrap_or("");

    let path = if let Some(rest) = raw.strip_prefix("//") {
        rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
    } else if raw.starts_with('/') {
        raw
    } else if let Some(idx) = raw.find("://") {
        let rest = &raw[idx + 3..];
        rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
    } else {
        raw
    };

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
