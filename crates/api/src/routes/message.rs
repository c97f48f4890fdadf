use axum::routing::{get, post};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST   /                 -> send_message
/// GET    /conversations    -> conversations
/// GET    /{user_id}        -> get_messages
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(message::send_message))
        .route("/conversations", get(message::conversations))
        .route("/{user_id}", get(message::get_messages))
}
