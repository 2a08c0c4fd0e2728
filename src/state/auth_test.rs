use super::*;

fn user(username: &str, name: Option<&str>) -> User {
    User {
        username: username.to_owned(),
        name: name.map(str::to_owned),
        email: None,
        claims: serde_json::Map::new(),
    }
}

#[test]
fn auth_state_default_has_no_user_and_is_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.username(), None);
    assert_eq!(state.display_name(), None);
}

#[test]
fn display_name_prefers_name_over_username() {
    let state = AuthState { user: Some(user("tyboro", Some("Ty"))), loading: false };
    assert_eq!(state.username(), Some("tyboro"));
    assert_eq!(state.display_name(), Some("Ty"));
}

#[test]
fn display_name_falls_back_to_username() {
    let state = AuthState { user: Some(user("runo", None)), loading: false };
    assert_eq!(state.display_name(), Some("runo"));
}
