//! Target entity model and DTOs.

use scholar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::form_input;

/// A row from the `targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: DbId,
    pub student_id: DbId,
    pub semester: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub deadline: Option<Timestamp>,
    pub assigned_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for assigning a new target. Status always starts as `pending`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTarget {
    pub student_id: DbId,
    #[serde(deserialize_with = "form_input::int")]
    pub semester: i32,
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 or a bare `YYYY-MM-DD` date; blank means no deadline.
    #[serde(default, deserialize_with = "form_input::optional_deadline")]
    pub deadline: Option<Timestamp>,
}

/// DTO for a student's status update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTargetStatus {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_target_accepts_form_strings() {
        let input: CreateTarget = serde_json::from_str(
            r#"{"studentId":1,"semester":"3","title":"x","description":"","deadline":"2026-11-30"}"#,
        )
        .unwrap();
        assert_eq!(input.semester, 3);
        assert_eq!(
            input.deadline.map(|d| d.to_rfc3339()),
            Some("2026-11-30T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn blank_or_missing_deadline_is_none() {
        let blank: CreateTarget =
            serde_json::from_str(r#"{"studentId":1,"semester":1,"title":"x","deadline":""}"#).unwrap();
        assert!(blank.deadline.is_none());

        let missing: CreateTarget =
            serde_json::from_str(r#"{"studentId":1,"semester":1,"title":"x"}"#).unwrap();
        assert!(missing.deadline.is_none());
    }

    #[test]
    fn non_numeric_semester_is_rejected() {
        let result =
            serde_json::from_str::<CreateTarget>(r#"{"studentId":1,"semester":"third","title":"x"}"#);
        assert!(result.is_err());
    }
}
