//! Return-destination persistence for the login round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! When an unauthenticated user hits a protected route, the attempted path
//! is stashed in `sessionStorage` before the app hands control to the
//! backend's OAuth endpoint. After the OAuth callback lands the user back
//! on `/?login=success`, the stored path is taken (read + cleared) and
//! replayed as an in-app navigation. One key, last write wins.

#[cfg(test)]
#[path = "return_path_test.rs"]
mod return_path_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "loginReturnUrl";

/// Session-scoped storage for the single return-destination entry.
pub trait ReturnPathStore {
    /// Overwrite the stored return path.
    fn store(&self, path: &str);

    /// Read and clear the stored return path.
    fn take(&self) -> Option<String>;
}

/// Store backed by the browser's `sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionReturnPath;

impl ReturnPathStore for SessionReturnPath {
    fn store(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(STORAGE_KEY, path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }

    fn take(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = session_storage()?;
            let path = storage.get_item(STORAGE_KEY).ok().flatten()?;
            let _ = storage.remove_item(STORAGE_KEY);
            Some(path)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Whether a query string marks a return from a successful login.
///
/// The backend redirects to the app with `login=success` in the query
/// string; only then may the stored return path be consumed. Any other
/// query (including `login=error`) must leave the stored path alone.
pub fn is_login_success(query: &str) -> bool {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').any(|pair| pair == "login=success")
}
