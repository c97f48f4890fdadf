//! Repository for the `accounts` table.

use scholar_core::profile::{fallback_enrollment_no, non_blank_or, FALLBACK_BRANCH};
use scholar_core::roles::Role;
use scholar_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::{Account, ContactCard, CreateAccount, NewStudentProfile};
use crate::repositories::ProfileRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

/// Provides registration and lookup for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    ///
    /// Student accounts get their profile in the same transaction, so an
    /// account never exists without its profile. Blank enrollment number or
    /// branch fall back to `TEMP<id>` and `General`.
    pub async fn register(
        pool: &PgPool,
        input: &CreateAccount,
        profile: &NewStudentProfile,
    ) -> Result<Account, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO accounts (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role.as_str())
            .fetch_one(&mut *tx)
            .await?;

        if input.role.has_profile() {
            let enrollment_no = non_blank_or(profile.enrollment_no.as_deref(), || {
                fallback_enrollment_no(account.id)
            });
            let branch = non_blank_or(profile.branch.as_deref(), || FALLBACK_BRANCH.to_string());
            ProfileRepo::insert_inner(&mut tx, account.id, &enrollment_no, &branch).await?;
        }

        tx.commit().await?;
        Ok(account)
    }

    /// Find an account by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the directory entry for a single account, of any role.
    pub async fn find_contact(pool: &PgPool, id: DbId) -> Result<Option<ContactCard>, sqlx::Error> {
        sqlx::query_as::<_, ContactCard>("SELECT id, name, email FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every account holding `role`, ordered by name.
    pub async fn list_contacts_by_role(
        pool: &PgPool,
        role: Role,
    ) -> Result<Vec<ContactCard>, sqlx::Error> {
        sqlx::query_as::<_, ContactCard>(
            "SELECT id, name, email FROM accounts WHERE role = $1 ORDER BY name, id",
        )
        .bind(role.as_str())
        .fetch_all(pool)
        .await
    }
}
