mod cal;
mod dateroll;

use chrono::prelude::*;

pub use crate::scheduling::calendars::{
    cal::{Cal, Holiday},
    dateroll::DateRoll,
};

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
