//! Scholar API server library.
//!
//! Exposes config, state, error handling, auth and the route tree so the
//! binary entrypoint and the integration tests share one router.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notifications;
pub mod router;
pub mod routes;
pub mod state;
