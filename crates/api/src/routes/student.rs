//! Route definitions for the `/student` resource. Student role only.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// ```text
/// GET    /profile        -> get_profile
/// PUT    /profile        -> update_profile
/// GET    /targets        -> list_targets
/// PUT    /targets/{id}   -> update_target_status
/// GET    /dashboard      -> dashboard
/// GET    /resume         -> resume
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(student::get_profile).put(student::update_profile),
        )
        .route("/targets", get(student::list_targets))
        .route("/targets/{id}", put(student::update_target_status))
        .route("/dashboard", get(student::dashboard))
        .route("/resume", get(student::resume))
}
