//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller resolved from a Bearer token.
//! - [`rbac::RequireAdmin`] / [`rbac::RequireStudent`] -- role gates.

pub mod auth;
pub mod rbac;
