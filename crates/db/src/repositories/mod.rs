//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod message_repo;
pub mod notification_repo;
pub mod profile_repo;
pub mod target_repo;

pub use account_repo::AccountRepo;
pub use message_repo::MessageRepo;
pub use notification_repo::NotificationRepo;
pub use profile_repo::ProfileRepo;
pub use target_repo::TargetRepo;
