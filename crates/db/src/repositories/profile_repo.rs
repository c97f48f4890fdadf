//! Repository for the `student_profiles` table.

use scholar_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::profile::{ProfileWithAccount, StudentProfile, UpdateProfile};

/// Column list for `student_profiles` queries.
const COLUMNS: &str = "id, account_id, enrollment_no, branch, current_semester, cgpa, \
                       phone, address, skills, achievements, social_links, education, \
                       projects, internships, certifications, semester_results, \
                       technical_skills, coding_profiles, created_at, updated_at";

/// Profile columns qualified with `p.` plus the owning account's name/email.
const JOINED_COLUMNS: &str = "p.id, p.account_id, p.enrollment_no, p.branch, \
                              p.current_semester, p.cgpa, p.phone, p.address, p.skills, \
                              p.achievements, p.social_links, p.education, p.projects, \
                              p.internships, p.certifications, p.semester_results, \
                              p.technical_skills, p.coding_profiles, p.created_at, \
                              p.updated_at, a.name, a.email";

/// Provides access to student profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile inside an open transaction (used by registration).
    pub(crate) async fn insert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        account_id: DbId,
        enrollment_no: &str,
        branch: &str,
    ) -> Result<StudentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_profiles (account_id, enrollment_no, branch)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(account_id)
            .bind(enrollment_no)
            .bind(branch)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find the profile owned by an account.
    pub async fn find_by_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_profiles WHERE account_id = $1");
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile owned by an account, with the account's name and email.
    pub async fn find_with_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<ProfileWithAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM student_profiles p
             JOIN accounts a ON a.id = p.account_id
             WHERE p.account_id = $1"
        );
        sqlx::query_as::<_, ProfileWithAccount>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// List every profile with its account, oldest first.
    pub async fn list_with_accounts(pool: &PgPool) -> Result<Vec<ProfileWithAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM student_profiles p
             JOIN accounts a ON a.id = p.account_id
             ORDER BY p.id"
        );
        sqlx::query_as::<_, ProfileWithAccount>(&query)
            .fetch_all(pool)
            .await
    }

    /// List profiles whose CGPA is at least `min_cgpa`, highest first.
    pub async fn list_with_min_cgpa(
        pool: &PgPool,
        min_cgpa: f64,
    ) -> Result<Vec<ProfileWithAccount>, sqlx::Error> {
        // Inclusive, so a student at exactly the threshold is listed. This
        // matches the academic gate in `progress::academic_eligible` rather than a
        // strict `cgpa > threshold` filter.
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM student_profiles p
             JOIN accounts a ON a.id = p.account_id
             WHERE p.cgpa >= $1
             ORDER BY p.cgpa DESC, p.id"
        );
        sqlx::query_as::<_, ProfileWithAccount>(&query)
            .bind(min_cgpa)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the supplied fields of an account's profile.
    ///
    /// Returns `None` if the account has no profile.
    pub async fn update_by_account(
        pool: &PgPool,
        account_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE student_profiles SET
                current_semester = COALESCE($2, current_semester),
                cgpa = COALESCE($3, cgpa),
                phone = COALESCE($4, phone),
                address = COALESCE($5, address),
                skills = COALESCE($6, skills),
                achievements = COALESCE($7, achievements),
                social_links = COALESCE($8, social_links),
                education = COALESCE($9, education),
                projects = COALESCE($10, projects),
                internships = COALESCE($11, internships),
                certifications = COALESCE($12, certifications),
                semester_results = COALESCE($13, semester_results),
                technical_skills = COALESCE($14, technical_skills),
                coding_profiles = COALESCE($15, coding_profiles)
             WHERE account_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(account_id)
            .bind(input.current_semester)
            .bind(input.cgpa)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(input.skills.as_ref().map(Json))
            .bind(input.achievements.as_ref().map(Json))
            .bind(input.social_links.as_ref().map(Json))
            .bind(input.education.as_ref().map(Json))
            .bind(input.projects.as_ref().map(Json))
            .bind(input.internships.as_ref().map(Json))
            .bind(input.certifications.as_ref().map(Json))
            .bind(input.semester_results.as_ref().map(Json))
            .bind(input.technical_skills.as_ref().map(Json))
            .bind(input.coding_profiles.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }
}
