use serde::{Deserialize, Serialize};

use crate::availability::Assignment;

/// An employee together with the ordered collection of their assignments.
///
/// Supplied by the external data-fetch layer as an immutable snapshot; the
/// engine never mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier of the employee.
    pub id: String,
    /// Display name, reported in conflict warnings.
    pub name: String,
    /// Hours worked per business day.
    pub daily_hours: u32,
    /// Assignments in their upstream order.
    pub assignments: Vec<Assignment>,
}

impl Employee {
    /// Iterate the employee's time-off assignments.
    pub fn time_off(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| a.is_time_off())
    }

    /// Iterate the employee's project and course assignments.
    pub fn engagements(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| !a.is_time_off())
    }
}
