//! Repository for the `targets` table.

use scholar_core::targets::TargetStatus;
use scholar_core::types::DbId;
use sqlx::PgPool;

use crate::models::target::{CreateTarget, Target};

/// Column list for `targets` queries.
const COLUMNS: &str = "id, student_id, semester, title, description, status, deadline, \
                       assigned_by, created_at, updated_at";

/// Provides create, lookup and status updates for targets.
pub struct TargetRepo;

impl TargetRepo {
    /// Insert a new target in the `pending` state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTarget,
        assigned_by: DbId,
    ) -> Result<Target, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (student_id, semester, title, description, deadline, assigned_by, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(input.student_id)
            .bind(input.semester)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(assigned_by)
            .bind(TargetStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a target by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Target>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE id = $1");
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every target assigned to a student, by semester then creation.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM targets
             WHERE student_id = $1
             ORDER BY semester, created_at, id"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// `(student_id, status)` for every target, for bulk progress computation.
    pub async fn list_student_statuses(pool: &PgPool) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, String)>("SELECT student_id, status FROM targets ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Set the status of a target.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: TargetStatus,
    ) -> Result<Option<Target>, sqlx::Error> {
        let query = format!(
            "UPDATE targets SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
