use chrono::prelude::*;
use indexmap::set::IndexSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::availability::{Assignment, Employee};
use crate::scheduling::{DateRoll, DateSpan};

/// Aggregated hour figures for one employee over one period.
///
/// All figures are whole hours. `assignable_hours` is signed: a negative
/// value flags over-allocation, a legitimate business condition the
/// presentation layer needs to surface, so it is reported as-is rather than
/// clamped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodHours {
    /// Working-hour budget for the period, net of weekends, holidays and
    /// time off.
    pub monthly_hours: u32,
    /// Hours consumed by project and course assignments within the period.
    pub monthly_assigned_hours: u32,
    /// Hours lost to time off within the period.
    pub monthly_off_hours: u32,
    /// `monthly_hours - monthly_assigned_hours`.
    pub assignable_hours: i64,
    /// Number of business days of time off within the period.
    pub time_off_day_count: u32,
}

/// Expand a time-off assignment into the individual business days it covers
/// within `period`.
///
/// Weekends and holidays are already excluded, so the result both feeds the
/// off-day set of workday counting and prices `monthly_off_hours` directly.
pub fn expand_time_off_days<C: DateRoll>(
    assignment: &Assignment,
    cal: &C,
    period: &DateSpan,
) -> Vec<NaiveDateTime> {
    cal.bus_days_within(&assignment.span, period)
}

/// The ordered union of time-off days across all of an employee's time-off
/// assignments intersecting `period`.
///
/// Overlapping time-off assignments are tolerated; each day appears once.
pub fn time_off_days<C: DateRoll>(
    employee: &Employee,
    cal: &C,
    period: &DateSpan,
) -> IndexSet<NaiveDateTime> {
    employee
        .time_off()
        .map(|a| expand_time_off_days(a, cal, period))
        .kmerge()
        .dedup()
        .collect()
}

/// Compute the aggregated hour figures for one employee over one period.
///
/// An assignment overlapping the period only partially is prorated to the
/// overlapping business days, never to its full span; one not overlapping at
/// all contributes 0. A `daily_hours` of 0 yields all-zero figures.
pub fn period_hours<C: DateRoll>(employee: &Employee, cal: &C, period: &DateSpan) -> PeriodHours {
    let off_days = time_off_days(employee, cal, period);
    let workdays = cal.bus_day_count(&period.start, &period.end, &off_days);
    let monthly_hours = employee.daily_hours * workdays;
    let monthly_off_hours = off_days.len() as u32 * employee.daily_hours;

    let monthly_assigned_hours: u32 = employee
        .engagements()
        .map(|a| assigned_hours(a, cal, period, &off_days))
        .sum();

    PeriodHours {
        monthly_hours,
        monthly_assigned_hours,
        monthly_off_hours,
        assignable_hours: monthly_hours as i64 - monthly_assigned_hours as i64,
        time_off_day_count: off_days.len() as u32,
    }
}

/// Hours one project/course assignment consumes within `period`.
///
/// The assignment span is clipped to the period bounds (later start, earlier
/// end); the business days of the clipped range, net of `off_days`, are then
/// priced at the assignment's per-day hours.
fn assigned_hours<C: DateRoll>(
    assignment: &Assignment,
    cal: &C,
    period: &DateSpan,
    off_days: &IndexSet<NaiveDateTime>,
) -> u32 {
    match assignment.span.intersection(period) {
        Some(clipped) => {
            cal.bus_day_count(&clipped.start, &clipped.end, off_days) * assignment.hours
        }
        None => 0,
    }
}

// UNIT TESTS
