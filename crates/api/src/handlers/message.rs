//! Handlers for the `/messages` resource (direct admin/student chat).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scholar_core::notifications::validate_message_body;
use scholar_core::types::DbId;
use scholar_db::models::account::ContactCard;
use scholar_db::models::message::{CreateMessage, Message};
use scholar_db::repositories::{AccountRepo, MessageRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/messages
///
/// The recipient id is stored as given and not checked against accounts.
pub async fn send_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<(StatusCode, Json<Message>)> {
    validate_message_body("content", &input.content)?;

    let message = MessageRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(
        message_id = message.id,
        sender_id = auth.user_id,
        recipient_id = message.recipient_id,
        "Message sent"
    );

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages/conversations
///
/// Admins see every student; students see every admin.
pub async fn conversations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactCard>>> {
    let contacts = AccountRepo::list_contacts_by_role(&state.pool, auth.role.counterpart()).await?;
    Ok(Json(contacts))
}

/// GET /api/messages/{user_id}
///
/// Both directions of the conversation, oldest first.
pub async fn get_messages(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(other_id): Path<DbId>,
) -> AppResult<Json<Vec<Message>>> {
    let messages = MessageRepo::list_between(&state.pool, auth.user_id, other_id).await?;
    Ok(Json(messages))
}
