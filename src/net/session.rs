//! Auth-session service: cached auth state and the login/logout lifecycle.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures inside `check_auth`, `logout`, and `profile` are logged
//! and converted to benign negative results so a flaky backend degrades
//! page behavior instead of crashing it. `authenticated_fetch` is the one
//! operation that raises: a 401 means the caller's work must be abandoned
//! in favor of the login redirect, and it must never be handed the 401
//! response as if it were real data.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};
use thiserror::Error;

use crate::net::transport::{ApiRequest, ApiResponse, AuthTransport, HttpTransport, TransportError};
use crate::net::types::{AuthStatus, LogoutResponse, ProfileResponse, User};
use crate::util::clock::{BrowserClock, Clock};
use crate::util::nav::{BrowserNavigation, NavigationPort};
use crate::util::return_path::{ReturnPathStore, SessionReturnPath};

pub const AUTH_CHECK_PATH: &str = "/api/auth/check";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_LOGOUT_PATH: &str = "/api/auth/logout";
pub const AUTH_PROFILE_PATH: &str = "/api/auth/profile";

/// How long a successful check keeps answering from the cache.
const CACHE_FRESHNESS_MS: f64 = 5_000.0;

const CONTENT_TYPE: &str = "Content-Type";

/// The one stored auth result. Replaced wholesale, never patched.
struct CacheEntry {
    value: AuthStatus,
    fetched_at_ms: f64,
}

/// Errors surfaced by [`AuthSession::authenticated_fetch`] and the typed
/// endpoint helpers built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401; the login redirect has already fired.
    #[error("unauthorized")]
    Unauthorized,
    /// The backend processed the request but reported failure.
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Handle components use to reach the single session instance.
///
/// The session holds browser-only port objects, so it rides in the
/// reactive system's local storage rather than a plain context value.
pub type SessionContext = StoredValue<Rc<AuthSession>, LocalStorage>;

/// Owns the per-tab authentication state.
///
/// Created once at application start and shared from there; route guards
/// and pages consult it for every access decision. All ports are injected
/// so tests can run natively with fakes.
pub struct AuthSession {
    transport: Box<dyn AuthTransport>,
    clock: Box<dyn Clock>,
    nav: Box<dyn NavigationPort>,
    return_path: Box<dyn ReturnPathStore>,
    cache: RefCell<Option<CacheEntry>>,
}

impl AuthSession {
    pub fn new(
        transport: Box<dyn AuthTransport>,
        clock: Box<dyn Clock>,
        nav: Box<dyn NavigationPort>,
        return_path: Box<dyn ReturnPathStore>,
    ) -> Self {
        Self { transport, clock, nav, return_path, cache: RefCell::new(None) }
    }

    /// Session wired to the real browser environment.
    pub fn browser() -> Self {
        Self::new(
            Box::new(HttpTransport),
            Box::new(BrowserClock),
            Box::new(BrowserNavigation),
            Box::new(SessionReturnPath),
        )
    }

    /// Whether the current user is authenticated, and who they are.
    ///
    /// Answers from the cache while the last successful check is younger
    /// than the freshness window, so repeated guard evaluations cost no
    /// network round trips. A failed or unreadable check returns a
    /// synthetic unauthenticated status and leaves the cache untouched; a
    /// prior success keeps serving until its own window expires. Callers
    /// always receive an owned copy.
    pub async fn check_auth(&self, force_refresh: bool) -> AuthStatus {
        let now = self.clock.now_ms();
        if !force_refresh {
            if let Some(status) = self.fresh_cached(now) {
                return status;
            }
        }

        match self.transport.send(ApiRequest::get(AUTH_CHECK_PATH)).await {
            Ok(response) => match response.json::<AuthStatus>() {
                Ok(status) => {
                    *self.cache.borrow_mut() =
                        Some(CacheEntry { value: status.clone(), fetched_at_ms: now });
                    status
                }
                Err(err) => {
                    log::warn!("auth check returned an unreadable body: {err}");
                    AuthStatus::unauthenticated()
                }
            },
            Err(err) => {
                log::warn!("auth check failed: {err}");
                AuthStatus::unauthenticated()
            }
        }
    }

    /// Discard the cached status; the next `check_auth` goes to the
    /// network regardless of freshness.
    pub fn clear_cache(&self) {
        *self.cache.borrow_mut() = None;
    }

    /// Begin the login flow from the current location.
    pub fn login(&self) {
        let path = self.nav.current_path();
        self.login_from(&path);
    }

    /// Begin the login flow, returning to `return_to` afterwards.
    ///
    /// Persists the return destination (last write wins) and hands the
    /// whole page to the backend's OAuth endpoint; this leaves the app.
    pub fn login_from(&self, return_to: &str) {
        self.return_path.store(return_to);
        self.nav.assign(AUTH_LOGIN_PATH);
    }

    /// End the session on the backend.
    ///
    /// The local cache is cleared whatever the backend says; a stale
    /// "authenticated" entry must never survive a logout attempt. Returns
    /// whether the backend reported success.
    pub async fn logout(&self) -> bool {
        let result = self.transport.send(ApiRequest::post(AUTH_LOGOUT_PATH)).await;
        self.clear_cache();
        match result {
            Ok(response) => match response.json::<LogoutResponse>() {
                Ok(body) => body.success,
                Err(err) => {
                    log::warn!("logout returned an unreadable body: {err}");
                    false
                }
            },
            Err(err) => {
                log::warn!("logout failed: {err}");
                false
            }
        }
    }

    /// The current user's profile, or `None` when logged out or the
    /// backend is unreachable.
    pub async fn profile(&self) -> Option<User> {
        let response = match self.transport.send(ApiRequest::get(AUTH_PROFILE_PATH)).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("profile fetch failed: {err}");
                return None;
            }
        };
        match response.json::<ProfileResponse>() {
            Ok(body) if body.authenticated => body.user,
            Ok(_) => None,
            Err(err) => {
                log::warn!("profile returned an unreadable body: {err}");
                None
            }
        }
    }

    /// Send a credentialed request, defaulting the content type to JSON.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` when the backend answers 401; the login
    /// redirect has already been triggered and the response is withheld.
    /// Transport failures pass through as `ApiError::Transport`.
    pub async fn authenticated_fetch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = if request.has_header(CONTENT_TYPE) {
            request
        } else {
            request.with_header(CONTENT_TYPE, "application/json")
        };
        let response = self.transport.send(request).await?;
        if response.status == 401 {
            self.login();
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }

    /// Read and clear the persisted return destination.
    ///
    /// Used by the login-completion flow after the OAuth callback lands
    /// the user back on the app.
    pub fn take_return_path(&self) -> Option<String> {
        self.return_path.take()
    }

    fn fresh_cached(&self, now_ms: f64) -> Option<AuthStatus> {
        let cache = self.cache.borrow();
        let entry = cache.as_ref()?;
        ((now_ms - entry.fetched_at_ms) < CACHE_FRESHNESS_MS).then(|| entry.value.clone())
    }
}
