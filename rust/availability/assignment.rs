use serde::{Deserialize, Serialize};

use crate::scheduling::DateSpan;

/// Payment basis for a project engagement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Fixed,
    Hourly,
}

/// Discriminates what an assignment binds an employee to.
///
/// Modelled as a tagged sum type so each variant carries exactly the fields
/// that exist for it, and handling is exhaustive at compile time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AssignmentKind {
    /// Billable project work.
    #[serde(rename_all = "camelCase")]
    Project {
        rate_type: RateType,
        hourly_rate: f64,
        role: String,
    },
    /// Course attendance.
    Course {},
    /// Absence. The employee is considered fully off for each business day
    /// covered; the `hours` figure of the assignment is not used.
    #[serde(rename_all = "camelCase")]
    TimeOff { time_off_type: Option<String> },
}

/// A record binding an employee to a project, course or time-off period for a
/// date range with a daily-hour allocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Identifier of the assignment itself.
    pub id: String,
    /// Reference to the assigned project or course; `None` for time off.
    pub assignable_id: Option<String>,
    /// The assigned period, inclusive on both ends.
    pub span: DateSpan,
    /// Hours per business day allocated to this assignment. Unused for
    /// [`AssignmentKind::TimeOff`].
    pub hours: u32,
    /// The assignment variant and its type-specific fields.
    pub kind: AssignmentKind,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Assignment {
    /// Returns whether this is a time-off assignment.
    pub fn is_time_off(&self) -> bool {
        matches!(self.kind, AssignmentKind::TimeOff { .. })
    }

    /// A coarse label of the variant, used for grouping.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            AssignmentKind::Project { .. } => "project",
            AssignmentKind::Course {} => "course",
            AssignmentKind::TimeOff { .. } => "timeOff",
        }
    }
}

// UNIT TESTS
