//! Scholar domain core.
//!
//! Pure domain logic shared by the database and API crates. Nothing in
//! here touches the database or the network: callers load rows and hand
//! plain values to these functions.

pub mod error;
pub mod notifications;
pub mod profile;
pub mod progress;
pub mod resume;
pub mod roles;
pub mod targets;
pub mod types;
