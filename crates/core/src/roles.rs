//! Account roles.
//!
//! Roles are stored as text in `accounts.role` and carried in JWT claims.
//! Every authorization checkpoint matches on [`Role`] exhaustively rather
//! than comparing strings.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_ADMIN: &str = "admin";

/// All valid role strings.
pub const VALID_ROLES: &[&str] = &[ROLE_STUDENT, ROLE_ADMIN];

/// The role an account was registered with. Immutable after creation.
///
/// Registration without an explicit role creates a student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            ROLE_STUDENT => Ok(Self::Student),
            ROLE_ADMIN => Ok(Self::Admin),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => ROLE_STUDENT,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// The role whose accounts appear in this role's conversation directory.
    ///
    /// Admins talk to students and students talk to admins.
    pub fn counterpart(&self) -> Role {
        match self {
            Self::Student => Self::Admin,
            Self::Admin => Self::Student,
        }
    }

    /// Whether accounts with this role own a student profile.
    pub fn has_profile(&self) -> bool {
        match self {
            Self::Student => true,
            Self::Admin => false,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
