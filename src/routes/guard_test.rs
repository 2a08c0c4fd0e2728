use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::session::AUTH_LOGIN_PATH;
use crate::net::transport::{ApiRequest, ApiResponse, AuthTransport, TransportError};
use crate::util::clock::Clock;
use crate::util::nav::NavigationPort;
use crate::util::return_path::ReturnPathStore;

// =============================================================
// Fake ports
// =============================================================

#[derive(Clone, Default)]
struct FakeTransport {
    call_count: Rc<Cell<usize>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
}

impl FakeTransport {
    fn push_check(&self, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status: 200, body: body.to_owned() }));
    }
}

#[async_trait(?Send)]
impl AuthTransport for FakeTransport {
    async fn send(&self, _req: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.call_count.set(self.call_count.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        1_000.0
    }
}

#[derive(Clone, Default)]
struct RecordingNav {
    assigned: Rc<RefCell<Vec<String>>>,
}

impl NavigationPort for RecordingNav {
    fn current_path(&self) -> String {
        "/".to_owned()
    }

    fn assign(&self, url: &str) {
        self.assigned.borrow_mut().push(url.to_owned());
    }
}

#[derive(Clone, Default)]
struct RecordingReturnPath(Rc<RefCell<Option<String>>>);

impl ReturnPathStore for RecordingReturnPath {
    fn store(&self, path: &str) {
        *self.0.borrow_mut() = Some(path.to_owned());
    }

    fn take(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }
}

struct Harness {
    session: AuthSession,
    transport: FakeTransport,
    nav: RecordingNav,
    returns: RecordingReturnPath,
}

fn harness() -> Harness {
    let transport = FakeTransport::default();
    let nav = RecordingNav::default();
    let returns = RecordingReturnPath::default();
    let session = AuthSession::new(
        Box::new(transport.clone()),
        Box::new(FixedClock),
        Box::new(nav.clone()),
        Box::new(returns.clone()),
    );
    Harness { session, transport, nav, returns }
}

fn authenticated_as(username: &str) -> String {
    format!(r#"{{"success": true, "authenticated": true, "user": {{"username": "{username}"}}}}"#)
}

// =============================================================
// Decision procedure
// =============================================================

#[test]
fn public_route_allows_without_consulting_the_session() {
    let h = harness();
    let outcome = block_on(evaluate(&h.session, &routes::LEADERBOARD, "/leaderboard"));
    assert_eq!(outcome, GuardOutcome::Allowed);
    assert_eq!(h.transport.call_count.get(), 0);
}

#[test]
fn unauthenticated_attempt_redirects_to_login_with_return_path() {
    let h = harness();
    h.transport.push_check(r#"{"success": true, "authenticated": false}"#);

    let outcome = block_on(evaluate(&h.session, &routes::SOLVE, "/solve"));

    assert_eq!(outcome, GuardOutcome::RedirectedToLogin);
    assert_eq!(h.returns.0.borrow().as_deref(), Some("/solve"));
    assert_eq!(h.nav.assigned.borrow().as_slice(), [AUTH_LOGIN_PATH.to_owned()]);
}

#[test]
fn check_failure_is_treated_as_unauthenticated() {
    let h = harness();
    // No scripted response: the transport errors, check_auth swallows it.
    let outcome = block_on(evaluate(&h.session, &routes::SOLVE, "/solve"));
    assert_eq!(outcome, GuardOutcome::RedirectedToLogin);
}

#[test]
fn authenticated_attempt_on_plain_auth_route_is_allowed() {
    let h = harness();
    h.transport.push_check(&authenticated_as("someone"));

    let outcome = block_on(evaluate(&h.session, &routes::SOLVE, "/solve"));

    assert_eq!(outcome, GuardOutcome::Allowed);
    assert!(h.nav.assigned.borrow().is_empty());
}

#[test]
fn allow_listed_users_reach_elevated_routes() {
    for username in ["tyboro", "runo"] {
        let h = harness();
        h.transport.push_check(&authenticated_as(username));
        let outcome = block_on(evaluate(&h.session, &routes::ADMIN, "/admin"));
        assert_eq!(outcome, GuardOutcome::Allowed, "{username} should be allowed");
    }
}

#[test]
fn other_users_are_sent_home_from_elevated_routes() {
    let h = harness();
    h.transport.push_check(&authenticated_as("someone"));

    let outcome = block_on(evaluate(&h.session, &routes::ADMIN, "/admin"));

    assert_eq!(outcome, GuardOutcome::RedirectedToHome);
    // In-app redirect: no full-page navigation, no return path.
    assert!(h.nav.assigned.borrow().is_empty());
    assert!(h.returns.0.borrow().is_none());
}

#[test]
fn authenticated_without_identity_is_sent_home_from_elevated_routes() {
    let h = harness();
    h.transport.push_check(r#"{"success": true, "authenticated": true}"#);

    let outcome = block_on(evaluate(&h.session, &routes::ADMIN, "/admin"));

    assert_eq!(outcome, GuardOutcome::RedirectedToHome);
}

#[test]
fn repeated_evaluations_within_the_window_share_one_check() {
    let h = harness();
    h.transport.push_check(&authenticated_as("tyboro"));

    block_on(evaluate(&h.session, &routes::SOLVE, "/solve"));
    block_on(evaluate(&h.session, &routes::ADMIN, "/admin"));

    assert_eq!(h.transport.call_count.get(), 1);
}
