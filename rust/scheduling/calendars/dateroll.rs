use chrono::prelude::*;
use chrono::Days;
use indexmap::set::IndexSet;

use crate::scheduling::DateSpan;

/// Day classification and iteration over a business day calendar.
///
/// Implementors supply the two classification primitives; everything else is
/// provided. All iteration is bounded by the number of calendar days in the
/// requested range, which for any visible window is at most a few hundred.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDateTime) -> bool {
        !self.is_bus_day(date)
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    ///
    /// An inverted input (`start > end`) yields an empty vector.
    fn cal_date_range(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut vec = Vec::new();
        let mut sample_date = *start;
        while sample_date <= *end {
            vec.push(sample_date);
            sample_date = sample_date + Days::new(1);
        }
        vec
    }

    /// Return a vector of business dates between a start and end, inclusive.
    ///
    /// The bounds themselves need not be business days; non-business days are
    /// simply skipped. An inverted input yields an empty vector.
    fn bus_date_range(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut vec = Vec::new();
        let mut sample_date = *start;
        while sample_date <= *end {
            if self.is_bus_day(&sample_date) {
                vec.push(sample_date);
            }
            sample_date = sample_date + Days::new(1);
        }
        vec
    }

    /// Count the business days in `[start, end]` that are not in `off_days`.
    ///
    /// `off_days` is a caller-supplied set of additional excluded dates,
    /// typically an employee's time-off days already expanded for the period.
    /// An inverted input (`start > end`) counts 0.
    fn bus_day_count(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
        off_days: &IndexSet<NaiveDateTime>,
    ) -> u32 {
        let mut counter: u32 = 0;
        let mut sample_date = *start;
        while sample_date <= *end {
            if self.is_bus_day(&sample_date) && !off_days.contains(&sample_date) {
                counter += 1;
            }
            sample_date = sample_date + Days::new(1);
        }
        counter
    }

    /// Return the business days of a span clipped to `bounds`.
    ///
    /// This is the expansion used for time-off assignments: only dates inside
    /// both the span and the bounding period qualify, and weekends/holidays
    /// are already excluded. Disjoint inputs yield an empty vector.
    fn bus_days_within(&self, span: &DateSpan, bounds: &DateSpan) -> Vec<NaiveDateTime> {
        match span.intersection(bounds) {
            Some(clipped) => self.bus_date_range(&clipped.start, &clipped.end),
            None => Vec::new(),
        }
    }
}

// UNIT TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::interval::span;
    use crate::scheduling::{ndt, Cal};

    fn fixture_hol_cal() -> Cal {
        // Friday 2024-03-29 is a holiday.
        Cal::new(vec![ndt(2024, 3, 29)], vec![5, 6])
    }

    #[test]
    fn test_cal_date_range() {
        let cal = fixture_hol_cal();
        let result = cal.cal_date_range(&ndt(2024, 3, 1), &ndt(2024, 3, 5));
        assert_eq!(
            result,
            vec![
                ndt(2024, 3, 1),
                ndt(2024, 3, 2),
                ndt(2024, 3, 3),
                ndt(2024, 3, 4),
                ndt(2024, 3, 5),
            ]
        );
    }

    #[test]
    fn test_cal_date_range_inverted() {
        let cal = fixture_hol_cal();
        assert!(cal
            .cal_date_range(&ndt(2024, 3, 5), &ndt(2024, 3, 1))
            .is_empty());
    }

    #[test]
    fn test_bus_date_range_skips_weekends_and_holidays() {
        let cal = fixture_hol_cal();
        // Thu 28th, Fri 29th (holiday), Sat 30th, Sun 31st, Mon 1st
        let result = cal.bus_date_range(&ndt(2024, 3, 28), &ndt(2024, 4, 1));
        assert_eq!(result, vec![ndt(2024, 3, 28), ndt(2024, 4, 1)]);
    }

    #[test]
    fn test_bus_day_count() {
        let cal = fixture_hol_cal();
        let none = IndexSet::new();
        // March 2024 has 21 weekdays; the 29th is a holiday here.
        assert_eq!(
            cal.bus_day_count(&ndt(2024, 3, 1), &ndt(2024, 3, 31), &none),
            20
        );
    }

    #[test]
    fn test_bus_day_count_with_off_days() {
        let cal = fixture_hol_cal();
        let off = IndexSet::from_iter(vec![ndt(2024, 3, 11), ndt(2024, 3, 12)]);
        assert_eq!(
            cal.bus_day_count(&ndt(2024, 3, 1), &ndt(2024, 3, 31), &off),
            18
        );
        // Off days outside the range do not affect the count.
        let off = IndexSet::from_iter(vec![ndt(2024, 4, 11)]);
        assert_eq!(
            cal.bus_day_count(&ndt(2024, 3, 1), &ndt(2024, 3, 31), &off),
            20
        );
    }

    #[test]
    fn test_bus_day_count_inverted_is_zero() {
        let cal = fixture_hol_cal();
        let none = IndexSet::new();
        assert_eq!(
            cal.bus_day_count(&ndt(2024, 3, 31), &ndt(2024, 3, 1), &none),
            0
        );
    }

    #[test]
    fn test_bus_days_within() {
        let cal = fixture_hol_cal();
        let bounds = span(2024, 3, 1, 2024, 3, 31);
        // Fri 2024-03-01 back through the prior week, clipped to March.
        let result = cal.bus_days_within(&span(2024, 2, 26, 2024, 3, 4), &bounds);
        assert_eq!(result, vec![ndt(2024, 3, 1), ndt(2024, 3, 4)]);

        // Disjoint from the bounds.
        let result = cal.bus_days_within(&span(2024, 4, 1, 2024, 4, 5), &bounds);
        assert!(result.is_empty());
    }
}
