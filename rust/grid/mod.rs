//! Map visible assignments onto a discrete calendar grid.
//!
//! A stateless pure transform of `(assignments, days, granularity)` into
//! 1-based column/row coordinates plus compaction hints, recomputed on every
//! input change. Week and month windows use one column per day; quarter
//! windows use one column per 7-day bucket.
//!
//! ### Example
//! ```rust
//! # use stafflib::availability::{Assignment, AssignmentKind};
//! # use stafflib::grid::layout_assignments;
//! # use stafflib::scheduling::{Cal, DateRoll, DateSpan, Granularity, ndt};
//! let cal = Cal::new(vec![], vec![5, 6]);
//! let days = cal.cal_date_range(&ndt(2024, 3, 3), &ndt(2024, 3, 9));
//! let assignments = vec![Assignment {
//!     id: "a1".to_string(),
//!     assignable_id: None,
//!     span: DateSpan::new(ndt(2024, 3, 6), ndt(2024, 3, 6)),
//!     hours: 0,
//!     kind: AssignmentKind::TimeOff { time_off_type: None },
//!     notes: None,
//! }];
//! let layout = layout_assignments(&assignments, &days, Granularity::Week);
//! assert_eq!(layout.placements[0].column_end - layout.placements[0].column_start, 1);
//! ```

mod compaction;
mod layout;

pub use crate::grid::layout::{layout_assignments, GridLayout, GridPlacement};
