//! Navigation guard: gatekeeps every transition onto a protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`evaluate`] is the entire decision procedure, a pure function of the
//! session and the target route's requirements; each attempt is
//! independent and idempotent given the same cached auth state.
//! [`install_route_guard`] is the Leptos glue protected pages call on
//! mount, which is once per attempted transition since the router mounts
//! the page component anew for each one.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::session::{AuthSession, SessionContext};
use crate::routes::{self, RouteSpec};

/// How a transition attempt resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The transition may commit.
    Allowed,
    /// The whole page was handed to the login flow; the transition must
    /// not commit.
    RedirectedToLogin,
    /// Authenticated but not allow-listed; go to the home route instead.
    RedirectedToHome,
}

/// Decide whether a transition to `route` may commit.
///
/// Public routes resolve immediately without consulting the session.
/// Unauthenticated attempts persist `attempted_path` as the return
/// destination and fire the login redirect as a side effect.
pub async fn evaluate(
    session: &AuthSession,
    route: &RouteSpec,
    attempted_path: &str,
) -> GuardOutcome {
    if !route.requires_auth {
        return GuardOutcome::Allowed;
    }

    let status = session.check_auth(false).await;
    if !status.authenticated {
        session.login_from(attempted_path);
        return GuardOutcome::RedirectedToLogin;
    }

    if !route.requires_elevated {
        return GuardOutcome::Allowed;
    }

    // A missing username matches no allow-list entry.
    let username = status.user.map(|u| u.username).unwrap_or_default();
    if routes::is_elevated(&username) {
        GuardOutcome::Allowed
    } else {
        log::debug!("user {username:?} is not allow-listed for {}", route.name);
        GuardOutcome::RedirectedToHome
    }
}

/// Run the guard for the mounting page and flip `allowed` on success.
///
/// On `RedirectedToHome` this performs the in-app navigation; on
/// `RedirectedToLogin` the full-page redirect is already in flight and
/// the page simply stays unrendered.
pub fn install_route_guard(route: &'static RouteSpec, allowed: RwSignal<bool>) {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let location = use_location();
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        let session = session.get_value();
        let navigate = navigate.clone();
        let attempted = location.pathname.get_untracked();
        leptos::task::spawn_local(async move {
            match evaluate(&session, route, &attempted).await {
                GuardOutcome::Allowed => allowed.set(true),
                GuardOutcome::RedirectedToHome => {
                    navigate(routes::HOME.path, NavigateOptions::default());
                }
                GuardOutcome::RedirectedToLogin => {}
            }
        });
    });
}
