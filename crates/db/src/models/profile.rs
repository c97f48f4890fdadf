//! Student profile model and DTOs.

use scholar_core::profile::{
    Certification, CodingProfile, Education, Internship, Project, SemesterResult, SocialLinks,
    TechnicalSkill,
};
use scholar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use super::form_input;

/// A row from the `student_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: DbId,
    pub account_id: DbId,
    pub enrollment_no: String,
    pub branch: String,
    pub current_semester: i32,
    pub cgpa: f64,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub skills: Json<Vec<String>>,
    pub achievements: Json<Vec<String>>,
    pub social_links: Json<SocialLinks>,
    pub education: Json<Education>,
    pub projects: Json<Vec<Project>>,
    pub internships: Json<Vec<Internship>>,
    pub certifications: Json<Vec<Certification>>,
    pub semester_results: Json<Vec<SemesterResult>>,
    pub technical_skills: Json<Vec<TechnicalSkill>>,
    pub coding_profiles: Json<Vec<CodingProfile>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A profile joined with its owning account's public fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileWithAccount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub name: String,
    pub email: String,
}

/// DTO for a student's profile update.
///
/// Every supplied field overwrites the stored value wholesale; absent
/// fields are left untouched. Enrollment number and branch are fixed at
/// registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[serde(default, deserialize_with = "form_input::optional_int")]
    pub current_semester: Option<i32>,
    #[serde(default, deserialize_with = "form_input::optional_float")]
    pub cgpa: Option<f64>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub skills: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub social_links: Option<SocialLinks>,
    pub education: Option<Education>,
    pub projects: Option<Vec<Project>>,
    pub internships: Option<Vec<Internship>>,
    pub certifications: Option<Vec<Certification>>,
    pub semester_results: Option<Vec<SemesterResult>>,
    pub technical_skills: Option<Vec<TechnicalSkill>>,
    pub coding_profiles: Option<Vec<CodingProfile>>,
}
