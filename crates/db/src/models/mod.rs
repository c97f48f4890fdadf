//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` / plain DTOs for inserts and patches

pub mod account;
pub mod form_input;
pub mod message;
pub mod notification;
pub mod profile;
pub mod target;
