//! Create a business day [`Cal`], resolve visible [`DateSpan`] windows and perform calendar date manipulation.
//!
//! The purpose of this module is to provide the pure date-driven primitives that the
//! availability and grid layers are built from;
//! - Business day classification net of weekends and company [`Holiday`] tables.
//! - Inclusive interval containment, overlap and clipping via [`DateSpan`].
//! - Window resolution and drift-free navigation for each [`Granularity`].
//! - Workday counting net of a caller-supplied set of off-days.
//!
//! # Calendars and Day Classification
//!
//! A [`Cal`] is formed of a weekend `week_mask` and a table of specific `holidays`. All
//! classification and iteration is exposed through the [`DateRoll`] trait.
//!
//! ### Example
//! This example builds a calendar with the standard Saturday/Sunday weekend and one
//! holiday, and counts the workdays of a week net of one further off-day.
//! ```rust
//! # use indexmap::IndexSet;
//! # use stafflib::scheduling::{Cal, DateRoll, ndt};
//! let cal = Cal::new(vec![ndt(2024, 5, 1)], vec![5, 6]);
//! let off = IndexSet::from_iter(vec![ndt(2024, 5, 2)]);
//! assert_eq!(cal.bus_day_count(&ndt(2024, 4, 28), &ndt(2024, 5, 4), &off), 3);
//! ```
//!
//! # Windows
//!
//! A [`Granularity`] resolves an anchor date into the visible window; windows move by
//! one navigation unit at a time and re-resolve, so navigation never drifts.
//!
//! ### Example
//! ```rust
//! # use stafflib::scheduling::{DateSpan, Direction, Granularity, ndt};
//! let range = Granularity::Week.resolve(&ndt(2024, 3, 6));
//! assert_eq!(range, DateSpan::new(ndt(2024, 3, 3), ndt(2024, 3, 9)));
//! let next = Granularity::Week.shift(&range, Direction::Forward);
//! assert_eq!(next.start, ndt(2024, 3, 10));
//! ```

mod calendars;
pub(crate) mod interval;
mod window;

pub use crate::scheduling::{
    calendars::{ndt, Cal, DateRoll, Holiday},
    interval::DateSpan,
    window::{anchor_or, parse_date, Direction, Granularity, QUARTER_WEEKS},
};
