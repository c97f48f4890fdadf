//! Handlers for the `/student` resource.
//!
//! Every endpoint requires the student role via [`RequireStudent`] and acts
//! on the caller's own data.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use scholar_core::error::CoreError;
use scholar_core::profile::{validate_cgpa, validate_current_semester, validate_semester_results};
use scholar_core::progress::{compute_progress, Eligibility, Progress};
use scholar_core::resume::{render_resume, ResumeSource};
use scholar_core::targets::{ensure_owner, group_by_semester, resolve_status_update};
use scholar_core::types::DbId;
use scholar_db::models::profile::{StudentProfile, UpdateProfile};
use scholar_db::models::target::{Target, UpdateTargetStatus};
use scholar_db::repositories::{ProfileRepo, TargetRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudent;
use crate::state::AppState;

/// Everything the student home page needs to render both banners.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub cgpa: f64,
    pub progress: Progress,
    pub eligibility: Eligibility,
    pub targets_by_semester: BTreeMap<i32, Vec<Target>>,
}

fn profile_not_found(account_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "StudentProfile",
        id: account_id,
    })
}

fn target_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Target",
        id,
    })
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /api/student/profile
pub async fn get_profile(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<StudentProfile>> {
    let profile = ProfileRepo::find_by_account(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| profile_not_found(user.user_id))?;
    Ok(Json(profile))
}

/// PUT /api/student/profile
///
/// Each supplied top-level field replaces the stored value.
pub async fn update_profile(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<StudentProfile>> {
    if let Some(cgpa) = input.cgpa {
        validate_cgpa(cgpa)?;
    }
    if let Some(semester) = input.current_semester {
        validate_current_semester(semester)?;
    }
    if let Some(results) = &input.semester_results {
        validate_semester_results(results)?;
    }

    let profile = ProfileRepo::update_by_account(&state.pool, user.user_id, &input)
        .await?
        .ok_or_else(|| profile_not_found(user.user_id))?;

    tracing::info!(account_id = user.user_id, profile_id = profile.id, "Profile updated");
    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// GET /api/student/targets
pub async fn list_targets(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Target>>> {
    let targets = TargetRepo::list_for_student(&state.pool, user.user_id).await?;
    Ok(Json(targets))
}

/// PUT /api/student/targets/{id}
///
/// Only the owning student may change a target; anyone else gets 401 and
/// the target is left untouched. An absent `status` keeps the current one.
pub async fn update_target_status(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
    Path(target_id): Path<DbId>,
    Json(input): Json<UpdateTargetStatus>,
) -> AppResult<Json<Target>> {
    let target = TargetRepo::find_by_id(&state.pool, target_id)
        .await?
        .ok_or_else(|| target_not_found(target_id))?;

    ensure_owner(target.student_id, user.user_id)?;
    let status = resolve_status_update(&target.status, input.status.as_deref())?;

    let updated = TargetRepo::update_status(&state.pool, target_id, status)
        .await?
        .ok_or_else(|| target_not_found(target_id))?;

    tracing::info!(
        target_id,
        student_id = user.user_id,
        from = %target.status,
        to = status.as_str(),
        "Target status updated"
    );

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Dashboard & resume
// ---------------------------------------------------------------------------

/// GET /api/student/dashboard
pub async fn dashboard(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let profile = ProfileRepo::find_by_account(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| profile_not_found(user.user_id))?;
    let targets = TargetRepo::list_for_student(&state.pool, user.user_id).await?;

    let progress = compute_progress(targets.iter().map(|t| t.status.as_str()));
    let eligibility = Eligibility::evaluate(profile.cgpa, &progress);

    Ok(Json(DashboardResponse {
        cgpa: profile.cgpa,
        progress,
        eligibility,
        targets_by_semester: group_by_semester(targets, |t| t.semester),
    }))
}

/// GET /api/student/resume
///
/// Plain-text resume built from the caller's profile.
pub async fn resume(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let student = ProfileRepo::find_with_account(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| profile_not_found(user.user_id))?;
    let profile = &student.profile;

    let text = render_resume(&ResumeSource {
        name: &student.name,
        email: &student.email,
        branch: &profile.branch,
        phone: profile.phone.as_deref(),
        address: profile.address.as_deref(),
        social_links: &profile.social_links,
        education: &profile.education,
        technical_skills: &profile.technical_skills,
        internships: &profile.internships,
        projects: &profile.projects,
        certifications: &profile.certifications,
        achievements: &profile.achievements,
    });

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
