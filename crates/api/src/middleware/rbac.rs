//! Role gates.
//!
//! Each extractor wraps [`AuthUser`] and rejects the wrong role with 403.
//! The role match is exhaustive, so adding a role forces every gate to
//! decide about it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use scholar_core::error::CoreError;
use scholar_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match user.role {
            Role::Admin => Ok(RequireAdmin(user)),
            Role::Student => Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            ))),
        }
    }
}

/// Requires the `student` role.
pub struct RequireStudent(pub AuthUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match user.role {
            Role::Student => Ok(RequireStudent(user)),
            Role::Admin => Err(AppError::Core(CoreError::Forbidden(
                "Student role required".into(),
            ))),
        }
    }
}
