//! Screen [`Employee`] assignment data and compute availability figures and conflict warnings.
//!
//! The purpose of this module is to provide the availability side of the engine;
//! - The typed data model: [`Employee`], [`Assignment`] and its [`AssignmentKind`] sum type.
//! - Screening of raw wire records, excluding and reporting corrupt input.
//! - Period hour aggregation into a [`PeriodHours`] report.
//! - Window filtering and time-off conflict detection.
//!
//! # Screening
//!
//! Assignment records arrive from the data-fetch layer with ISO string dates. Records
//! with unparseable dates or inverted ranges are excluded from every downstream
//! computation and reported as [`ScreenFault`] values, never silently dropped.
//!
//! ### Example
//! ```rust
//! # use stafflib::availability::{screen_assignments, RawAssignment, RawKind};
//! let raw = vec![RawAssignment {
//!     id: "a1".to_string(),
//!     kind: RawKind::Course,
//!     from_date: "2024-03-04".to_string(),
//!     to_date: "2024-03-08".to_string(),
//!     hours: 8,
//!     assignable_id: Some("c7".to_string()),
//!     rate_type: None,
//!     hourly_rate: None,
//!     role: None,
//!     time_off_type: None,
//!     notes: None,
//! }];
//! let screened = screen_assignments(&raw);
//! assert_eq!(screened.assignments.len(), 1);
//! assert!(screened.faults.is_empty());
//! ```
//!
//! # Aggregation
//!
//! [`period_hours`] combines the workday budget of a period with an employee's
//! assignment list. Time off is expanded to individual business days first, so
//! weekends and holidays are never double counted, and over-allocation surfaces as a
//! negative `assignable_hours` rather than being clamped.

mod assignment;
mod conflicts;
mod employee;
mod hours;
mod screen;

mod serde;

pub use crate::availability::{
    assignment::{Assignment, AssignmentKind, RateType},
    conflicts::{filter_visible, time_off_conflicts, TimeOffConflict},
    employee::Employee,
    hours::{expand_time_off_days, period_hours, time_off_days, PeriodHours},
    screen::{screen_assignments, RawAssignment, RawKind, ScreenFault, Screened},
};
