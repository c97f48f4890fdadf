//! Handlers for the `/notifications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use scholar_core::error::CoreError;
use scholar_core::notifications::{
    fanout_summary, validate_message_body, NotificationKind, RecipientScope,
};
use scholar_core::types::DbId;
use scholar_db::models::notification::Notification;
use scholar_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::notifications::send_notification;
use crate::state::AppState;

/// Request body for `POST /notifications`.
///
/// Without `recipientId` the notification goes to every student.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub recipient_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct SendNotificationResponse {
    pub message: String,
}

/// POST /api/notifications
pub async fn send(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SendNotificationRequest>,
) -> AppResult<(StatusCode, Json<SendNotificationResponse>)> {
    validate_message_body("message", &input.message)?;
    let kind = input
        .kind
        .as_deref()
        .map(NotificationKind::from_str_value)
        .transpose()?
        .unwrap_or_default();

    let count = send_notification(
        &state.pool,
        &state.mailer,
        admin.user_id,
        &input.message,
        kind,
        RecipientScope::from_recipient(input.recipient_id),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SendNotificationResponse {
            message: fanout_summary(count),
        }),
    ))
}

/// GET /api/notifications
///
/// The caller's notifications, newest first.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_recipient(&state.pool, auth.user_id).await?;
    Ok(Json(notifications))
}

/// POST /api/notifications/{id}/read
///
/// 204 on success, 404 if the notification is not the caller's.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationRepo::mark_read(&state.pool, notification_id, auth.user_id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id: notification_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
