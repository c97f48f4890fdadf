//! Target lifecycle and validation.
//!
//! A target is an admin-assigned, semester-scoped work item. It is created
//! in [`TargetStatus::Pending`] and only its owning student may change the
//! status afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_blank, CoreError};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid target status strings (mirrors the `ck_targets_status` constraint).
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED];

pub const MIN_SEMESTER: i32 = 1;
pub const MAX_SEMESTER: i32 = 12;

/// Maximum length of a target title.
pub const MAX_TITLE_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a target: `pending -> in_progress -> completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Pending,
    InProgress,
    Completed,
}

impl TargetStatus {
    /// Convert from a database or request string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid target status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl AsRef<str> for TargetStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Resolve the status a target should move to for an update request.
///
/// An absent status keeps the current one. Any valid status is accepted,
/// including moving backwards; only the owner check guards the update.
pub fn resolve_status_update(
    current: &str,
    requested: Option<&str>,
) -> Result<TargetStatus, CoreError> {
    match requested {
        Some(s) => TargetStatus::from_str_value(s),
        None => TargetStatus::from_str_value(current),
    }
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Ensure the caller owns the target before mutating it.
///
/// Returns [`CoreError::Unauthorized`] when `caller_id` is not the
/// target's student.
pub fn ensure_owner(target_student_id: DbId, caller_id: DbId) -> Result<(), CoreError> {
    if target_student_id != caller_id {
        return Err(CoreError::Unauthorized(
            "Not authorized to update this target".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a semester number.
pub fn validate_semester(semester: i32) -> Result<(), CoreError> {
    if !(MIN_SEMESTER..=MAX_SEMESTER).contains(&semester) {
        return Err(CoreError::Validation(format!(
            "semester must be between {MIN_SEMESTER} and {MAX_SEMESTER}, got {semester}"
        )));
    }
    Ok(())
}

/// Validate a target title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_blank("title", title)?;
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group items by semester, semesters ascending, preserving input order
/// within each semester.
pub fn group_by_semester<T>(items: Vec<T>, semester: impl Fn(&T) -> i32) -> BTreeMap<i32, Vec<T>> {
    let mut grouped: BTreeMap<i32, Vec<T>> = BTreeMap::new();
    for item in items {
        grouped.entry(semester(&item)).or_default().push(item);
    }
    grouped
}
