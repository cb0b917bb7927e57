use chrono::prelude::*;
use chrono::{Days, Months};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scheduling::{DateSpan, ndt};
use crate::ScheduleError;

/// The number of 7-day buckets in a quarter window.
pub const QUARTER_WEEKS: u32 = 13;

/// The calendar zoom level of a visible window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Seven days anchored to the week's first day (Sunday).
    Week,
    /// A calendar month.
    Month,
    /// A fixed window of [`QUARTER_WEEKS`] 7-day buckets, anchored to a week
    /// boundary so weekly sub-columns align.
    Quarter,
}

/// Navigation direction for shifting a visible window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Granularity {
    /// Resolve the visible window containing `anchor`.
    ///
    /// - `Week`: the Sunday on or before `anchor`, plus 6 days.
    /// - `Month`: the first through last day of `anchor`'s month.
    /// - `Quarter`: the Sunday on or before `anchor`, plus
    ///   `7 * QUARTER_WEEKS - 1` days.
    pub fn resolve(&self, anchor: &NaiveDateTime) -> DateSpan {
        match self {
            Granularity::Week => {
                let start = sunday_on_or_before(anchor);
                DateSpan::new(start, start + Days::new(6))
            }
            Granularity::Month => {
                let start = ndt(anchor.year(), anchor.month(), 1);
                let end = start + Months::new(1) - Days::new(1);
                DateSpan::new(start, end)
            }
            Granularity::Quarter => {
                let start = sunday_on_or_before(anchor);
                DateSpan::new(start, start + Days::new(7 * QUARTER_WEEKS as u64 - 1))
            }
        }
    }

    /// Shift a resolved window by one navigation unit and re-resolve.
    ///
    /// `Week` and `Quarter` windows are week-anchored and move by ±7 days;
    /// `Month` windows move by ±1 calendar month. Because the result is
    /// re-resolved, shifting forward then backward reproduces the original
    /// window exactly.
    pub fn shift(&self, range: &DateSpan, direction: Direction) -> DateSpan {
        let anchor = match (self, direction) {
            (Granularity::Month, Direction::Forward) => range.start + Months::new(1),
            (Granularity::Month, Direction::Backward) => range.start - Months::new(1),
            (_, Direction::Forward) => range.start + Days::new(7),
            (_, Direction::Backward) => range.start - Days::new(7),
        };
        self.resolve(&anchor)
    }
}

impl FromStr for Granularity {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            _ => Err(ScheduleError::UnknownGranularity {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Granularity::Week => write!(f, "week"),
            Granularity::Month => write!(f, "month"),
            Granularity::Quarter => write!(f, "quarter"),
        }
    }
}

fn sunday_on_or_before(date: &NaiveDateTime) -> NaiveDateTime {
    *date - Days::new(date.weekday().num_days_from_sunday() as u64)
}

/// Parse an ISO calendar-date string, e.g. `"2024-03-06"`.
pub fn parse_date(raw: &str) -> Result<NaiveDateTime, ScheduleError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        .map_err(|_| ScheduleError::UnparseableDate {
            value: raw.to_string(),
        })
}

/// Parse an anchor date, falling back to `today` when unparseable.
///
/// The surrounding application carries the anchor in a URL query parameter,
/// so garbage input is expected; the fallback is reported rather than left to
/// corrupt the resolved range. `today` is injected by the caller to keep the
/// engine deterministic.
pub fn anchor_or(raw: &str, today: NaiveDateTime) -> NaiveDateTime {
    match parse_date(raw) {
        Ok(date) => date,
        Err(_) => {
            tracing::warn!(anchor = raw, "unparseable anchor date, using today");
            today
        }
    }
}

// UNIT TESTS
