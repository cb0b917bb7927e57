use serde::{Deserialize, Serialize};

use crate::availability::{Assignment, Employee};
use crate::scheduling::DateSpan;

/// A warning that a candidate assignment overlaps existing time off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffConflict {
    /// Name of the employee whose time off is affected.
    pub employee_name: String,
    /// The dates shared by the candidate and the time-off assignment.
    pub overlapping_dates: DateSpan,
}

/// Keep only the assignments whose span intersects the visible window.
pub fn filter_visible<'a>(assignments: &'a [Assignment], window: &DateSpan) -> Vec<&'a Assignment> {
    assignments
        .iter()
        .filter(|a| a.span.intersects(window))
        .collect()
}

/// Report every time-off assignment of `employee` that a candidate span
/// overlaps.
///
/// Used to warn before creating a conflicting assignment. All simultaneous
/// conflicts are reported, each annotated with the actual overlapping date
/// span; an empty result means the candidate is clear.
pub fn time_off_conflicts(candidate: &DateSpan, employee: &Employee) -> Vec<TimeOffConflict> {
    employee
        .time_off()
        .filter_map(|a| a.span.intersection(candidate))
        .map(|overlap| TimeOffConflict {
            employee_name: employee.name.clone(),
            overlapping_dates: overlap,
        })
        .collect()
}

// UNIT TESTS
