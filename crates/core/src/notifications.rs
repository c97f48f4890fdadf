//! Notification kinds and fan-out recipient selection.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_blank, CoreError};
use crate::types::DbId;

pub const KIND_GENERAL: &str = "general";
pub const KIND_CONTEST: &str = "contest";
pub const KIND_COMPETITION: &str = "competition";

/// All valid notification kinds (mirrors `ck_notifications_kind`).
pub const VALID_KINDS: &[&str] = &[KIND_GENERAL, KIND_CONTEST, KIND_COMPETITION];

/// Maximum length of a notification or chat message body.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    General,
    Contest,
    Competition,
}

impl NotificationKind {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            KIND_GENERAL => Ok(Self::General),
            KIND_CONTEST => Ok(Self::Contest),
            KIND_COMPETITION => Ok(Self::Competition),
            _ => Err(CoreError::Validation(format!(
                "Invalid notification type '{s}'. Must be one of: {}",
                VALID_KINDS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => KIND_GENERAL,
            Self::Contest => KIND_CONTEST,
            Self::Competition => KIND_COMPETITION,
        }
    }
}

/// Who a notification is materialised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientScope {
    /// One specific account. Resolves to nobody if the account is absent.
    Single(DbId),
    /// Every student account that exists at send time.
    AllStudents,
}

impl RecipientScope {
    pub fn from_recipient(recipient_id: Option<DbId>) -> Self {
        match recipient_id {
            Some(id) => Self::Single(id),
            None => Self::AllStudents,
        }
    }
}

/// Validate a notification or chat message body.
pub fn validate_message_body(field: &str, body: &str) -> Result<(), CoreError> {
    require_non_blank(field, body)?;
    if body.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Human-readable fan-out summary returned to the sender.
pub fn fanout_summary(recipient_count: usize) -> String {
    format!("Notification sent to {recipient_count} students")
}

/// Subject line of the notification email.
pub fn email_subject(kind: NotificationKind) -> String {
    format!("New {} Notification", kind.as_str())
}
