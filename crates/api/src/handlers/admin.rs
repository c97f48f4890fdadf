//! Handlers for the `/admin` resource.
//!
//! Every endpoint requires the admin role via [`RequireAdmin`].

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use scholar_core::error::CoreError;
use scholar_core::progress::{
    academic_eligible, compute_progress, progress_eligible, ScholarshipBucket,
    ACADEMIC_CGPA_THRESHOLD,
};
use scholar_core::roles::Role;
use scholar_core::targets::{validate_semester, validate_title};
use scholar_core::types::DbId;
use scholar_db::models::profile::ProfileWithAccount;
use scholar_db::models::target::{CreateTarget, Target};
use scholar_db::repositories::{AccountRepo, ProfileRepo, TargetRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/students`.
#[derive(Debug, Default, Deserialize)]
pub struct StudentListParams {
    /// `eligible` or `risk`; omitted lists everyone.
    pub bucket: Option<String>,
}

/// One row of the admin student overview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOverview {
    #[serde(flatten)]
    pub student: ProfileWithAccount,
    /// Completion percentage.
    pub progress: u32,
    pub total_targets: u32,
    pub completed_targets: u32,
    pub progress_eligible: bool,
    pub academic_eligible: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/students
///
/// Every student with their progress figures, optionally filtered to one
/// scholarship bucket.
pub async fn list_students(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StudentListParams>,
) -> AppResult<Json<Vec<StudentOverview>>> {
    let bucket = params
        .bucket
        .as_deref()
        .map(ScholarshipBucket::from_str_value)
        .transpose()?;

    let profiles = ProfileRepo::list_with_accounts(&state.pool).await?;

    let mut statuses_by_student: HashMap<DbId, Vec<String>> = HashMap::new();
    for (student_id, status) in TargetRepo::list_student_statuses(&state.pool).await? {
        statuses_by_student.entry(student_id).or_default().push(status);
    }

    let overview = profiles
        .into_iter()
        .filter_map(|student| {
            let statuses = statuses_by_student
                .remove(&student.profile.account_id)
                .unwrap_or_default();
            let progress = compute_progress(&statuses);

            if let Some(wanted) = bucket {
                if ScholarshipBucket::from_progress(&progress) != wanted {
                    return None;
                }
            }

            let cgpa = student.profile.cgpa;
            Some(StudentOverview {
                student,
                progress: progress.percent,
                total_targets: progress.total,
                completed_targets: progress.completed,
                progress_eligible: progress_eligible(progress.percent),
                academic_eligible: academic_eligible(cgpa),
            })
        })
        .collect();

    Ok(Json(overview))
}

/// POST /api/admin/targets
///
/// Assign a new target to a student. It always starts as `pending`.
pub async fn assign_target(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTarget>,
) -> AppResult<(StatusCode, Json<Target>)> {
    validate_title(&input.title)?;
    validate_semester(input.semester)?;

    let student = AccountRepo::find_by_id(&state.pool, input.student_id).await?;
    let is_student = match student {
        Some(account) => account.role()? == Role::Student,
        None => false,
    };
    if !is_student {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }));
    }

    let target = TargetRepo::create(&state.pool, &input, admin.user_id).await?;

    tracing::info!(
        target_id = target.id,
        student_id = target.student_id,
        semester = target.semester,
        assigned_by = admin.user_id,
        "Target assigned"
    );

    Ok((StatusCode::CREATED, Json(target)))
}

/// GET /api/admin/scholarship
///
/// Students whose CGPA is at or above the academic threshold, highest first.
/// The comparison is inclusive (`>=`), matching the dashboard eligibility check.
pub async fn scholarship_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProfileWithAccount>>> {
    let eligible = ProfileRepo::list_with_min_cgpa(&state.pool, ACADEMIC_CGPA_THRESHOLD).await?;
    Ok(Json(eligible))
}
