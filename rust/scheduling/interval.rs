use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scheduling::ndt;
use crate::ScheduleError;

/// An inclusive calendar-date interval, `start <= end`.
///
/// This is the single interval primitive reused by every higher component:
/// window filtering, conflict detection, period clipping and grid layout all
/// reduce to [`DateSpan::intersects`] and [`DateSpan::intersection`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First date of the interval, inclusive.
    pub start: NaiveDateTime,
    /// Last date of the interval, inclusive.
    pub end: NaiveDateTime,
}

impl DateSpan {
    /// Create a span from ordered dates.
    ///
    /// Panics if `start > end`. Use [`DateSpan::try_new`] for unscreened
    /// input.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start <= end, "`start` must not exceed `end`.");
        DateSpan { start, end }
    }

    /// Create a span, rejecting inverted input.
    pub fn try_new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ScheduleError> {
        if start > end {
            Err(ScheduleError::InvertedRange {
                start: start.date().to_string(),
                end: end.date().to_string(),
            })
        } else {
            Ok(DateSpan { start, end })
        }
    }

    /// A span covering a single calendar date.
    pub fn single(date: NaiveDateTime) -> Self {
        DateSpan {
            start: date,
            end: date,
        }
    }

    /// Return whether `date` falls within the span, inclusive on both ends.
    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Return whether two spans share at least one date.
    ///
    /// Inclusive on both ends and symmetric: a single-day span overlaps
    /// another span exactly when that day is contained in it.
    pub fn intersects(&self, other: &DateSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Return the common sub-span of two spans, or `None` when disjoint.
    ///
    /// The intersection picks the later of the two starts and the earlier of
    /// the two ends, which is the clipping rule used when prorating an
    /// assignment to a visible period.
    pub fn intersection(&self, other: &DateSpan) -> Option<DateSpan> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            None
        } else {
            Some(DateSpan { start, end })
        }
    }

    /// The number of calendar days in the span, inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Create a [`DateSpan`] from date components, for test fixtures.
pub fn span(y1: i32, m1: u32, d1: u32, y2: i32, m2: u32, d2: u32) -> DateSpan {
    DateSpan::new(ndt(y1, m1, d1), ndt(y2, m2, d2))
}

// UNIT TESTS
