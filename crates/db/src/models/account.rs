//! Account entity model and DTOs.

use scholar_core::error::CoreError;
use scholar_core::roles::Role;
use scholar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    /// Parse the stored role string.
    pub fn role(&self) -> Result<Role, CoreError> {
        Role::from_str_value(&self.role)
    }

    pub fn to_response(&self) -> AccountResponse {
        AccountResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            created_at: self.created_at,
        }
    }
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// Directory entry: just enough to address someone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactCard {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a new account.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Registration details for the profile created alongside a student account.
///
/// Missing or blank values fall back to `TEMP<account id>` and `General`.
#[derive(Debug, Clone, Default)]
pub struct NewStudentProfile {
    pub enrollment_no: Option<String>,
    pub branch: Option<String>,
}
