//! Handlers for the `/users` resource (register, login, current account).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use scholar_core::error::{require_non_blank, CoreError};
use scholar_core::roles::Role;
use scholar_core::types::DbId;
use scholar_db::models::account::{Account, AccountResponse, CreateAccount, NewStudentProfile};
use scholar_db::repositories::AccountRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /users`.
///
/// `role` defaults to student. `enrollmentNo` and `branch` only apply to
/// students and fall back to `TEMP<id>` and `General` when omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub enrollment_no: Option<String>,
    pub branch: Option<String>,
}

/// Returned by both register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    require_non_blank("name", &input.name)?;
    require_non_blank("email", &input.email)?;
    require_non_blank("password", &input.password)?;

    let role = match input.role.as_deref() {
        Some(r) => Role::from_str_value(r)?,
        None => Role::default(),
    };

    let email = input.email.trim().to_lowercase();
    if AccountRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::register(
        &state.pool,
        &CreateAccount {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            role,
        },
        &NewStudentProfile {
            enrollment_no: input.enrollment_no,
            branch: input.branch,
        },
    )
    .await?;

    tracing::info!(account_id = account.id, role = %role, "Account registered");

    let response = auth_response(&state, &account, role)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim().to_lowercase();
    let account = AccountRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    let role = account.role()?;
    tracing::info!(account_id = account.id, role = %role, "Login succeeded");

    Ok(Json(auth_response(&state, &account, role)?))
}

/// GET /api/users/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<AccountResponse>> {
    let account = AccountRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id: auth.user_id,
        }))?;
    Ok(Json(account.to_response()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

fn auth_response(state: &AppState, account: &Account, role: Role) -> AppResult<AuthResponse> {
    let token = generate_access_token(account.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        id: account.id,
        name: account.name.clone(),
        email: account.email.clone(),
        role,
        token,
    })
}
