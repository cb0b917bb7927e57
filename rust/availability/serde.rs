use crate::availability::{
    Assignment, Employee, PeriodHours, RawAssignment, ScreenFault, TimeOffConflict,
};
use crate::json::JSON;
use crate::scheduling::{DateSpan, Holiday};

impl JSON for DateSpan {}
impl JSON for Holiday {}
impl JSON for RawAssignment {}
impl JSON for Vec<RawAssignment> {}
impl JSON for Assignment {}
impl JSON for Employee {}
impl JSON for PeriodHours {}
impl JSON for ScreenFault {}
impl JSON for TimeOffConflict {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::AssignmentKind;
    use crate::scheduling::interval::span;
    use crate::scheduling::ndt;

    #[test]
    fn test_employee_json() {
        let emp = Employee {
            id: "e1".to_string(),
            name: "Ada".to_string(),
            daily_hours: 8,
            assignments: vec![Assignment {
                id: "a1".to_string(),
                assignable_id: Some("p1".to_string()),
                span: span(2024, 3, 4, 2024, 3, 8),
                hours: 8,
                kind: AssignmentKind::TimeOff {
                    time_off_type: Some("vacation".to_string()),
                },
                notes: None,
            }],
        };
        let js = emp.to_json().unwrap();
        let emp2 = Employee::from_json(&js).unwrap();
        assert_eq!(emp, emp2);
    }

    #[test]
    fn test_holiday_json() {
        let hol = Holiday::new(ndt(2024, 5, 1), "Labour Day");
        let js = hol.to_json().unwrap();
        let hol2 = Holiday::from_json(&js).unwrap();
        assert_eq!(hol, hol2);
    }

    #[test]
    fn test_raw_assignment_json() {
        let js = r#"{
            "id": "a1",
            "type": "project",
            "fromDate": "2024-03-04",
            "toDate": "2024-03-08",
            "hours": 8,
            "assignableId": "p1",
            "rateType": "hourly",
            "hourlyRate": 95.0,
            "role": "developer"
        }"#;
        let raw = RawAssignment::from_json(js).unwrap();
        assert_eq!(raw.id, "a1");
        assert_eq!(raw.from_date, "2024-03-04");
        assert_eq!(raw.hourly_rate, Some(95.0));
        assert_eq!(raw.time_off_type, None);
    }

    #[test]
    fn test_period_hours_json() {
        let report = PeriodHours {
            monthly_hours: 168,
            monthly_assigned_hours: 40,
            monthly_off_hours: 0,
            assignable_hours: 128,
            time_off_day_count: 0,
        };
        let js = report.to_json().unwrap();
        assert!(js.contains("\"assignableHours\":128"));
        assert_eq!(PeriodHours::from_json(&js).unwrap(), report);
    }
}
