use serde::{Deserialize, Serialize};

use crate::availability::{Assignment, AssignmentKind, RateType};
use crate::scheduling::{parse_date, DateSpan};
use crate::ScheduleError;

/// The assignment variant names accepted on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RawKind {
    Project,
    Course,
    TimeOff,
}

/// An assignment record as received from the data-fetch layer.
///
/// Dates arrive as ISO calendar-date strings and type-specific fields as
/// optionals; [`screen_assignments`] converts these into typed [`Assignment`]
/// values and reports the records it has to exclude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssignment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RawKind,
    pub from_date: String,
    pub to_date: String,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub assignable_id: Option<String>,
    #[serde(default)]
    pub rate_type: Option<RateType>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub time_off_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A record excluded during screening, and why.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenFault {
    /// Identifier of the offending assignment.
    pub assignment_id: String,
    /// The reason it was excluded.
    pub error: ScheduleError,
}

/// The outcome of screening a batch of raw assignment records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Screened {
    /// Records that passed, in their upstream order.
    pub assignments: Vec<Assignment>,
    /// Records that were excluded, with reasons.
    pub faults: Vec<ScreenFault>,
}

/// Convert raw records into typed assignments.
///
/// Records with unparseable dates or inverted ranges (`toDate < fromDate`)
/// indicate upstream data corruption the engine does not attempt to repair:
/// they are excluded from all downstream computation and reported back, never
/// silently miscounted and never fatal.
pub fn screen_assignments(raw: &[RawAssignment]) -> Screened {
    let mut screened = Screened::default();
    for record in raw.iter() {
        match screen_one(record) {
            Ok(assignment) => screened.assignments.push(assignment),
            Err(error) => {
                tracing::warn!(
                    assignment_id = record.id.as_str(),
                    %error,
                    "excluding assignment from computation"
                );
                screened.faults.push(ScreenFault {
                    assignment_id: record.id.clone(),
                    error,
                });
            }
        }
    }
    screened
}

fn screen_one(record: &RawAssignment) -> Result<Assignment, ScheduleError> {
    let from = parse_date(&record.from_date)?;
    let to = parse_date(&record.to_date)?;
    let span = DateSpan::try_new(from, to)?;
    let kind = match record.kind {
        RawKind::Project => AssignmentKind::Project {
            rate_type: record.rate_type.unwrap_or(RateType::Fixed),
            hourly_rate: record.hourly_rate.unwrap_or(0.0),
            role: record.role.clone().unwrap_or_default(),
        },
        RawKind::Course => AssignmentKind::Course {},
        RawKind::TimeOff => AssignmentKind::TimeOff {
            time_off_type: record.time_off_type.clone(),
        },
    };
    Ok(Assignment {
        id: record.id.clone(),
        assignable_id: record.assignable_id.clone(),
        span,
        hours: record.hours,
        kind,
        notes: record.notes.clone(),
    })
}

// UNIT TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::interval::span;

    fn fixture_raw(id: &str, from: &str, to: &str) -> RawAssignment {
        RawAssignment {
            id: id.to_string(),
            kind: RawKind::Project,
            from_date: from.to_string(),
            to_date: to.to_string(),
            hours: 8,
            assignable_id: Some("p1".to_string()),
            rate_type: Some(RateType::Hourly),
            hourly_rate: Some(80.0),
            role: Some("developer".to_string()),
            time_off_type: None,
            notes: None,
        }
    }

    #[test]
    fn test_screen_valid() {
        let raw = vec![fixture_raw("a1", "2024-03-04", "2024-03-08")];
        let screened = screen_assignments(&raw);
        assert!(screened.faults.is_empty());
        assert_eq!(screened.assignments.len(), 1);
        assert_eq!(screened.assignments[0].span, span(2024, 3, 4, 2024, 3, 8));
    }

    #[test]
    fn test_screen_unparseable_date() {
        let raw = vec![
            fixture_raw("a1", "04/03/2024", "2024-03-08"),
            fixture_raw("a2", "2024-03-04", "2024-03-08"),
        ];
        let screened = screen_assignments(&raw);
        assert_eq!(screened.assignments.len(), 1);
        assert_eq!(screened.assignments[0].id, "a2");
        assert_eq!(
            screened.faults,
            vec![ScreenFault {
                assignment_id: "a1".to_string(),
                error: ScheduleError::UnparseableDate {
                    value: "04/03/2024".to_string()
                },
            }]
        );
    }

    #[test]
    fn test_screen_inverted_range() {
        let raw = vec![fixture_raw("a1", "2024-03-08", "2024-03-04")];
        let screened = screen_assignments(&raw);
        assert!(screened.assignments.is_empty());
        assert_eq!(
            screened.faults[0].error,
            ScheduleError::InvertedRange {
                start: "2024-03-08".to_string(),
                end: "2024-03-04".to_string(),
            }
        );
    }

    #[test]
    fn test_screen_time_off_fields() {
        let raw = vec![RawAssignment {
            kind: RawKind::TimeOff,
            time_off_type: Some("vacation".to_string()),
            ..fixture_raw("a1", "2024-03-11", "2024-03-12")
        }];
        let screened = screen_assignments(&raw);
        assert_eq!(
            screened.assignments[0].kind,
            AssignmentKind::TimeOff {
                time_off_type: Some("vacation".to_string())
            }
        );
    }
}
