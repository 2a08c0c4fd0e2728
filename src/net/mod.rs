//! Networking modules for the backend auth and challenge API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` owns credentialed HTTP,
//! `session` holds the cached auth state and login/logout lifecycle, and
//! `api` provides typed endpoint helpers on top of the session.

pub mod api;
pub mod session;
pub mod transport;
pub mod types;
