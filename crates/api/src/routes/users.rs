//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /        -> register (public)
/// POST   /login   -> login (public)
/// GET    /me      -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}
