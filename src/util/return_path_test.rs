use super::*;

#[test]
fn is_login_success_matches_plain_success_query() {
    assert!(is_login_success("?login=success"));
}

#[test]
fn is_login_success_accepts_query_without_leading_question_mark() {
    assert!(is_login_success("login=success"));
}

#[test]
fn is_login_success_matches_success_among_other_params() {
    assert!(is_login_success("?foo=1&login=success"));
}

#[test]
fn is_login_success_rejects_login_error() {
    assert!(!is_login_success("?login=error&message=denied"));
}

#[test]
fn is_login_success_rejects_partial_matches() {
    assert!(!is_login_success("?login=successful"));
    assert!(!is_login_success("?relogin=success"));
}

#[test]
fn is_login_success_rejects_empty_query() {
    assert!(!is_login_success(""));
}
