//! Typed helpers for the non-auth backend endpoints.
//!
//! Built on [`AuthSession::authenticated_fetch`] so an expired session on
//! any of these calls lands the user in the login flow instead of
//! surfacing a 401 to page code.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::session::{ApiError, AuthSession};
use crate::net::transport::ApiRequest;
use crate::net::types::{LeaderboardResponse, LeaderboardRow, ProcessTextResponse};

pub const LEADERBOARD_PATH: &str = "/api/leaderboard";
pub const PROCESS_TEXT_PATH: &str = "/api/process-text";

fn process_text_request(text: &str) -> ApiRequest {
    ApiRequest::post(PROCESS_TEXT_PATH).with_body(serde_json::json!({ "text": text }).to_string())
}

/// Fetch the leaderboard, already ranked by the backend.
///
/// # Errors
///
/// `ApiError::Rejected` when the backend reports failure, plus the usual
/// unauthorized/transport cases from `authenticated_fetch`.
pub async fn fetch_leaderboard(session: &AuthSession) -> Result<Vec<LeaderboardRow>, ApiError> {
    let response = session.authenticated_fetch(ApiRequest::get(LEADERBOARD_PATH)).await?;
    let body: LeaderboardResponse = response.json()?;
    if body.success {
        Ok(body.leaderboard)
    } else {
        Err(ApiError::Rejected(body.error.unwrap_or_default()))
    }
}

/// Submit solution text for processing and scoring.
///
/// # Errors
///
/// Same taxonomy as [`fetch_leaderboard`].
pub async fn submit_text(
    session: &AuthSession,
    text: &str,
) -> Result<ProcessTextResponse, ApiError> {
    let response = session.authenticated_fetch(process_text_request(text)).await?;
    let body: ProcessTextResponse = response.json()?;
    if body.success {
        Ok(body)
    } else {
        Err(ApiError::Rejected(body.error.unwrap_or_default()))
    }
}
