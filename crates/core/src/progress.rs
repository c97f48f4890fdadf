//! Target progress and scholarship eligibility.
//!
//! Progress is derived from a student's full target set every time it is
//! needed; nothing here is persisted. Two eligibility gates are computed
//! independently and are never folded into a single flag:
//!
//! - **academic**: `cgpa >= 8.5`
//! - **progress**: `percent >= 90`

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::targets::STATUS_COMPLETED;

/// Minimum CGPA (inclusive) for the academic gate.
pub const ACADEMIC_CGPA_THRESHOLD: f64 = 8.5;

/// Minimum completion percentage (inclusive) for the progress gate.
pub const PROGRESS_PERCENT_THRESHOLD: u32 = 90;

pub const BUCKET_ELIGIBLE: &str = "eligible";
pub const BUCKET_RISK: &str = "risk";

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Completion summary for one student's targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total: u32,
    pub completed: u32,
    /// `round(100 * completed / total)`, half rounded up; 0 when `total == 0`.
    pub percent: u32,
}

/// Compute progress over the statuses of every target assigned to a student.
///
/// All targets count toward `total` regardless of semester, deadline, or
/// whether the status string is one we recognise; only `"completed"` counts
/// toward `completed`.
pub fn compute_progress<I, S>(statuses: I) -> Progress
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (total, completed) = statuses.into_iter().fold((0u32, 0u32), |(t, c), s| {
        let done = s.as_ref() == STATUS_COMPLETED;
        (t + 1, c + u32::from(done))
    });

    Progress {
        total,
        completed,
        percent: rounded_percent(completed, total),
    }
}

/// Integer round-half-up of `100 * part / whole`.
fn rounded_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    // (200p + w) / 2w == floor(100p/w + 1/2)
    ((200 * part + whole) / (2 * whole)) as u32
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

pub fn academic_eligible(cgpa: f64) -> bool {
    cgpa >= ACADEMIC_CGPA_THRESHOLD
}

pub fn progress_eligible(percent: u32) -> bool {
    percent >= PROGRESS_PERCENT_THRESHOLD
}

/// Both scholarship gates, evaluated separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub academic: bool,
    pub progress: bool,
}

impl Eligibility {
    pub fn evaluate(cgpa: f64, progress: &Progress) -> Self {
        Self {
            academic: academic_eligible(cgpa),
            progress: progress_eligible(progress.percent),
        }
    }
}

/// Admin list bucket, driven by the progress gate only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScholarshipBucket {
    Eligible,
    Risk,
}

impl ScholarshipBucket {
    pub fn from_progress(progress: &Progress) -> Self {
        if progress_eligible(progress.percent) {
            Self::Eligible
        } else {
            Self::Risk
        }
    }

    /// Convert from a query-string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            BUCKET_ELIGIBLE => Ok(Self::Eligible),
            BUCKET_RISK => Ok(Self::Risk),
            _ => Err(CoreError::Validation(format!(
                "Invalid bucket '{s}'. Must be one of: {BUCKET_ELIGIBLE}, {BUCKET_RISK}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::TargetStatus;

    fn statuses(total: usize, completed: usize) -> Vec<TargetStatus> {
        (0..total)
            .map(|i| {
                if i < completed {
                    TargetStatus::Completed
                } else {
                    TargetStatus::Pending
                }
            })
            .collect()
    }

    // -- compute_progress ---------------------------------------------------

    #[test]
    fn empty_target_set_is_zero() {
        let p = compute_progress(Vec::<TargetStatus>::new());
        assert_eq!(
            p,
            Progress {
                total: 0,
                completed: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn one_of_three_rounds_down_to_33() {
        assert_eq!(compute_progress(statuses(3, 1)).percent, 33);
    }

    #[test]
    fn two_of_three_rounds_up_to_67() {
        assert_eq!(compute_progress(statuses(3, 2)).percent, 67);
    }

    #[test]
    fn three_of_four_is_75() {
        let p = compute_progress(statuses(4, 3));
        assert_eq!((p.total, p.completed, p.percent), (4, 3, 75));
    }

    #[test]
    fn exact_half_rounds_up() {
        // 1/8 = 12.5%
        assert_eq!(compute_progress(statuses(8, 1)).percent, 13);
        // 1/200 = 0.5%
        assert_eq!(compute_progress(statuses(200, 1)).percent, 1);
    }

    #[test]
    fn in_progress_and_unknown_statuses_count_toward_total_only() {
        let p = compute_progress(["completed", "in_progress", "archived", "pending"]);
        assert_eq!((p.total, p.completed, p.percent), (4, 1, 25));
    }

    #[test]
    fn percent_bounds_hold_for_all_small_sets() {
        for total in 0..=40 {
            for completed in 0..=total {
                let p = compute_progress(statuses(total, completed));
                assert!(p.percent <= 100);
                assert_eq!(
                    p.percent == 100,
                    completed == total && total > 0,
                    "total={total} completed={completed} percent={}",
                    p.percent
                );
            }
        }
    }

    #[test]
    fn same_input_same_output() {
        let set = statuses(7, 5);
        assert_eq!(compute_progress(set.clone()), compute_progress(set));
    }

    // -- gates ----------------------------------------------------------------

    #[test]
    fn academic_gate_is_inclusive_at_8_5() {
        assert!(academic_eligible(8.5));
        assert!(academic_eligible(9.1));
        assert!(!academic_eligible(8.49));
    }

    #[test]
    fn progress_gate_is_inclusive_at_90() {
        assert!(progress_eligible(90));
        assert!(progress_eligible(100));
        assert!(!progress_eligible(89));
    }

    #[test]
    fn gates_are_independent() {
        let strong_work = compute_progress(statuses(10, 10));
        let weak_work = compute_progress(statuses(10, 1));

        assert_eq!(
            Eligibility::evaluate(7.0, &strong_work),
            Eligibility {
                academic: false,
                progress: true
            }
        );
        assert_eq!(
            Eligibility::evaluate(9.0, &weak_work),
            Eligibility {
                academic: true,
                progress: false
            }
        );
    }

    #[test]
    fn bucket_follows_progress_gate() {
        assert_eq!(
            ScholarshipBucket::from_progress(&compute_progress(statuses(10, 9))),
            ScholarshipBucket::Eligible
        );
        assert_eq!(
            ScholarshipBucket::from_progress(&compute_progress(statuses(0, 0))),
            ScholarshipBucket::Risk
        );
    }

    #[test]
    fn bucket_parses_query_values() {
        assert_eq!(
            ScholarshipBucket::from_str_value("eligible").unwrap(),
            ScholarshipBucket::Eligible
        );
        assert!(ScholarshipBucket::from_str_value("maybe").is_err());
    }
}
