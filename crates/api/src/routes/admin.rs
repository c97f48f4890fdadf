//! Route definitions for the `/admin` resource. Admin role only.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /students      -> list_students
/// POST   /targets       -> assign_target
/// GET    /scholarship   -> scholarship_list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(admin::list_students))
        .route("/targets", post(admin::assign_target))
        .route("/scholarship", get(admin::scholarship_list))
}
