use std::sync::Arc;

use scholar_core::notifications::{email_subject, NotificationKind, RecipientScope};
use scholar_core::roles::Role;
use scholar_core::types::DbId;
use scholar_db::models::account::ContactCard;
use scholar_db::repositories::{AccountRepo, NotificationRepo};
use scholar_db::DbPool;
use scholar_events::{NotificationMailer, OutboundEmail};

use crate::error::AppResult;

/// Send a notification and return how many accounts received it.
///
/// Recipients are snapshotted when the call starts. All rows are inserted
/// in one statement, so either every recipient gets the notification or
/// the request fails. Emails go out afterwards on a detached task and never
/// affect the result.
pub async fn send_notification(
    pool: &DbPool,
    mailer: &Arc<NotificationMailer>,
    sender_id: DbId,
    message: &str,
    kind: NotificationKind,
    scope: RecipientScope,
) -> AppResult<usize> {
    let recipients = resolve_recipients(pool, scope).await?;
    let recipient_ids: Vec<DbId> = recipients.iter().map(|r| r.id).collect();

    let created =
        NotificationRepo::create_batch(pool, sender_id, message, kind, &recipient_ids).await?;

    tracing::info!(
        sender_id,
        kind = kind.as_str(),
        recipients = created.len(),
        "Notification fanned out"
    );

    let emails: Vec<OutboundEmail> = recipients
        .into_iter()
        .map(|r| OutboundEmail {
            to: r.email,
            subject: email_subject(kind),
            body: message.to_string(),
        })
        .collect();

    if !emails.is_empty() {
        let mailer = Arc::clone(mailer);
        tokio::spawn(async move {
            let report = mailer.dispatch(emails).await;
            tracing::debug!(
                sent = report.sent,
                failed = report.failed,
                logged = report.logged,
                "Notification emails dispatched"
            );
        });
    }

    Ok(created.len())
}

/// A single recipient resolves to nobody when the account is absent.
async fn resolve_recipients(pool: &DbPool, scope: RecipientScope) -> AppResult<Vec<ContactCard>> {
    let recipients = match scope {
        RecipientScope::Single(id) => AccountRepo::find_contact(pool, id)
            .await?
            .into_iter()
            .collect(),
        RecipientScope::AllStudents => AccountRepo::list_contacts_by_role(pool, Role::Student).await?,
    };
    Ok(recipients)
}
