//! Student profile documents.
//!
//! The nested sections are stored as JSONB and are overwritten wholesale
//! when a student updates them, so each section is a plain serde value
//! type with every field optional.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::targets::{MAX_SEMESTER, MIN_SEMESTER};
use crate::types::DbId;

/// Branch recorded when a student registers without one.
pub const FALLBACK_BRANCH: &str = "General";

/// Prefix of the placeholder enrollment number.
pub const FALLBACK_ENROLLMENT_PREFIX: &str = "TEMP";

pub const MIN_CGPA: f64 = 0.0;
pub const MAX_CGPA: f64 = 10.0;

// ---------------------------------------------------------------------------
// Nested sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub leetcode: Option<String>,
    pub other: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolRecord {
    pub school: Option<String>,
    pub year: Option<String>,
    pub percentage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollegeRecord {
    pub college: Option<String>,
    pub year: Option<String>,
    pub percentage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DegreeRecord {
    pub college: Option<String>,
    /// Expected graduation year.
    pub year: Option<String>,
    pub current_cgpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub ssc: SchoolRecord,
    pub intermediate: CollegeRecord,
    pub btech: DegreeRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    pub company: String,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: Option<String>,
    pub year: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemesterResult {
    pub semester: Option<i32>,
    pub sgpa: Option<f64>,
    pub cgpa: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalSkill {
    pub category: String,
    pub items: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodingProfile {
    pub platform: String,
    pub handle: Option<String>,
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Registration fallbacks
// ---------------------------------------------------------------------------

/// Placeholder enrollment number for a student registered without one.
///
/// Derived from the account id so it is deterministic and unique.
pub fn fallback_enrollment_no(account_id: DbId) -> String {
    format!("{FALLBACK_ENROLLMENT_PREFIX}{account_id}")
}

/// Use the supplied value unless it is missing or blank.
pub fn non_blank_or(value: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_cgpa(cgpa: f64) -> Result<(), CoreError> {
    if !cgpa.is_finite() || !(MIN_CGPA..=MAX_CGPA).contains(&cgpa) {
        return Err(CoreError::Validation(format!(
            "cgpa must be between {MIN_CGPA} and {MAX_CGPA}, got {cgpa}"
        )));
    }
    Ok(())
}

pub fn validate_current_semester(semester: i32) -> Result<(), CoreError> {
    if !(MIN_SEMESTER..=MAX_SEMESTER).contains(&semester) {
        return Err(CoreError::Validation(format!(
            "currentSemester must be between {MIN_SEMESTER} and {MAX_SEMESTER}, got {semester}"
        )));
    }
    Ok(())
}

/// Validate every semester result row that carries values.
pub fn validate_semester_results(results: &[SemesterResult]) -> Result<(), CoreError> {
    for result in results {
        if let Some(sem) = result.semester {
            validate_current_semester(sem)?;
        }
        for gpa in [result.sgpa, result.cgpa].into_iter().flatten() {
            validate_cgpa(gpa)?;
        }
    }
    Ok(())
}
