//! Repository for the `messages` table.

use scholar_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{CreateMessage, Message};

/// Column list for `messages` queries.
const COLUMNS: &str = "id, sender_id, recipient_id, content, created_at";

/// Append-only access to direct messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Append a message. The recipient is not checked against `accounts`.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        input: &CreateMessage,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (sender_id, recipient_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(sender_id)
            .bind(input.recipient_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Both directions of the conversation between two accounts, oldest first.
    pub async fn list_between(
        pool: &PgPool,
        a: DbId,
        b: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages
             WHERE (sender_id = $1 AND recipient_id = $2)
                OR (sender_id = $2 AND recipient_id = $1)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(a)
            .bind(b)
            .fetch_all(pool)
            .await
    }
}
