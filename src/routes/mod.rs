//! Declarative route table and route-level access requirements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Access metadata lives here, next to the paths it protects; the guard in
//! [`guard`] reads it, and `app` builds the router from the same table so
//! the two can never disagree about which paths exist.


pub mod guard;

/// Static access requirements for one route. Defined once at table
/// construction, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    /// Absolute path as the router matches it.
    pub path: &'static str,
    /// Stable route name for logging and lookups.
    pub name: &'static str,
    /// Whether the route requires a live login.
    pub requires_auth: bool,
    /// Whether the route additionally requires allow-list membership.
    /// Implies `requires_auth`.
    pub requires_elevated: bool,
}

pub static HOME: RouteSpec =
    RouteSpec { path: "/", name: "home", requires_auth: false, requires_elevated: false };
pub static LEADERBOARD: RouteSpec = RouteSpec {
    path: "/leaderboard",
    name: "leaderboard",
    requires_auth: false,
    requires_elevated: false,
};
pub static SOLVE: RouteSpec =
    RouteSpec { path: "/solve", name: "solve", requires_auth: true, requires_elevated: false };
pub static ADMIN: RouteSpec =
    RouteSpec { path: "/admin", name: "admin", requires_auth: true, requires_elevated: true };
pub static OTHER: RouteSpec =
    RouteSpec { path: "/other", name: "other", requires_auth: false, requires_elevated: false };

/// Every route the app serves, in navigation order.
pub static ROUTES: &[&RouteSpec] = &[&HOME, &LEADERBOARD, &SOLVE, &ADMIN, &OTHER];

/// Usernames permitted on elevated routes. Matched exactly,
/// case-sensitively.
pub static ELEVATED_USERS: &[&str] = &["tyboro", "runo"];

/// Look up a route by its exact path.
pub fn find(path: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().copied().find(|route| route.path == path)
}

/// Whether `username` may access elevated routes.
pub fn is_elevated(username: &str) -> bool {
    ELEVATED_USERS.contains(&username)
}
