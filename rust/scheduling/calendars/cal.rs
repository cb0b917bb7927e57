use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::scheduling::DateRoll;

/// A company-wide holiday: a calendar date and a display name.
///
/// Holidays apply to every employee; they are never counted as assignable or
/// assigned time regardless of any assignment covering them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDateTime,
    /// Display name, e.g. `"Labour Day"`.
    pub name: String,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: NaiveDateTime, name: &str) -> Self {
        Holiday {
            date,
            name: name.to_string(),
        }
    }
}

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general business days. In Western culture these
///   are typically `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week, and cannot be
///   business days.
///
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDateTime>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. `week_mask` is a vector of days
    /// (0=Mon,.., 6=Sun) that are excluded from the working week.
    pub fn new(holidays: Vec<NaiveDateTime>, week_mask: Vec<u8>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask: HashSet::from_iter(
                week_mask.into_iter().map(|v| Weekday::try_from(v).unwrap()),
            ),
        }
    }

    /// Create a calendar from the company holiday table, with the standard
    /// Saturday/Sunday weekend mask.
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Cal::new(holidays.iter().map(|h| h.date).collect(), vec![5, 6])
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.holidays.contains(date)
    }
}

// UNIT TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![ndt(2024, 3, 29), ndt(2024, 4, 1)]; // Good Friday and Easter Monday
        Cal::new(hols, vec![5, 6])
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_holiday(&ndt(2024, 3, 29))); // In hol list
        assert!(!cal.is_holiday(&ndt(2024, 3, 28))); // Not in hol list
        assert!(!cal.is_holiday(&ndt(2024, 3, 30))); // Saturday, but not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&ndt(2024, 3, 29))); // a holiday is still a weekday
        assert!(!cal.is_weekday(&ndt(2024, 3, 30))); // Saturday
        assert!(!cal.is_weekday(&ndt(2024, 3, 31))); // Sunday
        assert!(cal.is_weekday(&ndt(2024, 4, 2))); // Tuesday
    }

    #[test]
    fn test_is_bus_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&ndt(2024, 3, 29))); // holiday
        assert!(!cal.is_bus_day(&ndt(2024, 3, 30))); // weekend
        assert!(cal.is_bus_day(&ndt(2024, 3, 28))); // plain Thursday
    }

    #[test]
    fn test_from_holidays() {
        let hols = vec![
            Holiday::new(ndt(2024, 5, 1), "Labour Day"),
            Holiday::new(ndt(2024, 5, 9), "Ascension Day"),
        ];
        let cal = Cal::from_holidays(&hols);
        assert!(cal.is_holiday(&ndt(2024, 5, 1)));
        assert!(!cal.is_bus_day(&ndt(2024, 5, 4))); // Saturday from the default mask
        assert!(cal.is_bus_day(&ndt(2024, 5, 2)));
    }
}
