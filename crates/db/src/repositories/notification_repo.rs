//! Repository for the `notifications` table.

use scholar_core::notifications::NotificationKind;
use scholar_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, recipient_id, sender_id, message, kind, is_read, created_at";

/// Provides batch creation and per-recipient access to notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Materialise one notification row per recipient.
    ///
    /// A single `INSERT ... SELECT FROM UNNEST` statement, so either every
    /// row persists or none does.
    pub async fn create_batch(
        pool: &PgPool,
        sender_id: DbId,
        message: &str,
        kind: NotificationKind,
        recipient_ids: &[DbId],
    ) -> Result<Vec<Notification>, sqlx::Error> {
        if recipient_ids.is_empty() {
            return Ok(vec![]);
        }

        let query = format!(
            "INSERT INTO notifications (recipient_id, sender_id, message, kind) \
             SELECT r, $2, $3, $4 FROM UNNEST($1::bigint[]) AS r \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_ids)
            .bind(sender_id)
            .bind(message)
            .bind(kind.as_str())
            .fetch_all(pool)
            .await
    }

    /// List a recipient's notifications, newest first.
    pub async fn list_for_recipient(
        pool: &PgPool,
        recipient_id: DbId,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE recipient_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification belongs to `recipient_id` (whether
    /// or not it was already read), `false` otherwise.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        recipient_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true \
             WHERE id = $1 AND recipient_id = $2",
        )
        .bind(notification_id)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
