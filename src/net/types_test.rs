use super::*;

#[test]
fn auth_status_parses_authenticated_check_response() {
    let body = r#"{
        "success": true,
        "authenticated": true,
        "user": {"id": 7, "username": "tyboro", "name": "Ty", "picture": "https://cdn/x.png"}
    }"#;
    let status: AuthStatus = serde_json::from_str(body).unwrap();
    assert!(status.success);
    assert!(status.authenticated);
    let user = status.user.unwrap();
    assert_eq!(user.username, "tyboro");
    assert_eq!(user.name.as_deref(), Some("Ty"));
    assert_eq!(user.email, None);
}

#[test]
fn user_keeps_unknown_claims() {
    let body = r#"{"username": "runo", "picture": "https://cdn/r.png", "id": 3}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.claims.get("picture").and_then(|v| v.as_str()), Some("https://cdn/r.png"));
    assert_eq!(user.claims.get("id").and_then(serde_json::Value::as_i64), Some(3));
}

#[test]
fn auth_status_parses_unauthenticated_check_response() {
    let status: AuthStatus = serde_json::from_str(r#"{"success": true, "authenticated": false}"#).unwrap();
    assert!(status.success);
    assert!(!status.authenticated);
    assert!(status.user.is_none());
}

#[test]
fn auth_status_unauthenticated_is_all_negative() {
    let status = AuthStatus::unauthenticated();
    assert!(!status.success);
    assert!(!status.authenticated);
    assert!(status.user.is_none());
    assert!(status.error.is_none());
}

#[test]
fn logout_response_defaults_to_failure() {
    let resp: LogoutResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.success);
}

#[test]
fn leaderboard_response_parses_rows() {
    let body = r#"{
        "success": true,
        "leaderboard": [
            {"rank": 1, "name": "Henry Davis", "score": 4200, "avatar": "A"},
            {"rank": 2, "name": "Ada", "score": 900}
        ]
    }"#;
    let resp: LeaderboardResponse = serde_json::from_str(body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.leaderboard.len(), 2);
    assert_eq!(resp.leaderboard[0].name, "Henry Davis");
    assert_eq!(resp.leaderboard[1].avatar, None);
}

#[test]
fn profile_response_without_user_is_unauthenticated() {
    let resp: ProfileResponse = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(!resp.authenticated);
    assert!(resp.user.is_none());
}
