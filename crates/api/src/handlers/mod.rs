//! Request handlers, one module per resource.
//!
//! Handlers validate input with `scholar_core`, delegate persistence to the
//! repositories in `scholar_db` and map failures through [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod message;
pub mod notification;
pub mod student;
