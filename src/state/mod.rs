//! Shared reactive state provided via context.

pub mod auth;
