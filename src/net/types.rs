//! Wire DTOs for the backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. Every field the backend may omit is
//! defaulted, since auth responses vary by authentication state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the auth endpoints.
///
/// `username` is the only field authorization decisions look at; it is
/// matched exactly and case-sensitively. Everything else is display data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Login name, unique per user.
    pub username: String,
    /// Display name, if the identity provider supplied one.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address, if the identity provider supplied one.
    #[serde(default)]
    pub email: Option<String>,
    /// Open-ended additional claims (avatar URL, provider ids, ...).
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

/// Result of an auth check, as returned by `GET /api/auth/check`.
///
/// Also the synthetic shape handed to callers when the check itself fails:
/// `success: false, authenticated: false`, nothing cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether the backend processed the request.
    #[serde(default)]
    pub success: bool,
    /// Whether the session cookie maps to a live login.
    #[serde(default)]
    pub authenticated: bool,
    /// The authenticated user, present only when `authenticated`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Backend-reported error detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthStatus {
    /// The status reported when a check could not be completed.
    pub fn unauthenticated() -> Self {
        Self { success: false, authenticated: false, user: None, error: None }
    }
}

/// Response of `POST /api/auth/logout`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
}

/// Response of `GET /api/auth/profile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// A single row of the public leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based position, already ordered by the backend.
    pub rank: u32,
    /// Display name of the entrant.
    pub name: String,
    /// Accumulated score.
    pub score: i64,
    /// Avatar emoji or URL assigned by the backend.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Response of `GET /api/leaderboard`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardRow>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /api/process-text`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProcessTextResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub processed_text: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub error: Option<String>,
}
