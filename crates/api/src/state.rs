use std::sync::Arc;

use scholar_events::NotificationMailer;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: scholar_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Email side channel for notification fan-out.
    pub mailer: Arc<NotificationMailer>,
}
