use chrono::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::availability::Assignment;
use crate::grid::compaction::hints;
use crate::json::JSON;
use crate::scheduling::{DateSpan, Granularity};

/// Grid coordinates and rendering hints for one assignment.
///
/// Columns are 1-based grid lines, `column_end` exclusive, so a single-day
/// assignment spans `column_end - column_start == 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlacement {
    /// Identifier of the assignment this placement renders.
    pub assignment_id: String,
    /// First occupied grid line.
    pub column_start: u32,
    /// Grid line the bar ends before.
    pub column_end: u32,
    /// 1-based row index.
    pub row: u32,
    /// The bar is too narrow for detail text.
    pub compact: bool,
    /// The bar is too narrow for any inner content.
    pub hidden: bool,
}

/// The layout of one employee's (or one assignable's) visible assignments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// One placement per visible assignment, time off first.
    pub placements: Vec<GridPlacement>,
    /// Number of columns in the grid: days, or 7-day buckets for quarter.
    pub total_columns: u32,
    /// Number of rows the placements occupy.
    pub row_count: u32,
}

impl JSON for GridPlacement {}
impl JSON for GridLayout {}

/// Lay out assignments onto the discrete time grid of a visible window.
///
/// `days` is the ordered visible-day array produced by `cal_date_range` over
/// the resolved window; for [`Granularity::Quarter`] its length is a multiple
/// of 7 and columns are 7-day buckets, otherwise one column per day.
///
/// Assignments not overlapping the window are skipped. Spans reaching outside
/// the window are clamped to its first and last column.
///
/// Row rules: when a single kind is visible everything shares row 1; with
/// mixed kinds, time off occupies a dedicated shared row 1 (drawn topmost)
/// and the remaining assignments stack one-per-row below in input order.
/// Time-off placements always sort first in the output; the rest keep their
/// relative input order.
pub fn layout_assignments(
    assignments: &[Assignment],
    days: &[NaiveDateTime],
    granularity: Granularity,
) -> GridLayout {
    if days.is_empty() {
        return GridLayout::default();
    }
    let total_columns = match granularity {
        Granularity::Quarter => days.len() as u32 / 7,
        Granularity::Week | Granularity::Month => days.len() as u32,
    };

    let window = DateSpan::new(days[0], days[days.len() - 1]);
    let (time_off, engagements): (Vec<&Assignment>, Vec<&Assignment>) = assignments
        .iter()
        .filter(|a| a.span.intersects(&window))
        .partition(|a| a.is_time_off());

    let kind_count = time_off
        .iter()
        .chain(engagements.iter())
        .map(|a| a.kind_label())
        .unique()
        .count();
    let single_kind = kind_count == 1;

    let mut placements: Vec<GridPlacement> = Vec::new();
    for a in time_off.iter() {
        placements.push(place(a, days, granularity, 1));
    }
    let first_stack_row = if single_kind || time_off.is_empty() {
        1
    } else {
        2
    };
    for (i, a) in engagements.iter().enumerate() {
        let row = if single_kind {
            1
        } else {
            first_stack_row + i as u32
        };
        placements.push(place(a, days, granularity, row));
    }

    let row_count = if placements.is_empty() {
        0
    } else if single_kind {
        1
    } else {
        first_stack_row - 1 + engagements.len() as u32
    };

    GridLayout {
        placements,
        total_columns,
        row_count,
    }
}

fn place(
    assignment: &Assignment,
    days: &[NaiveDateTime],
    granularity: Granularity,
    row: u32,
) -> GridPlacement {
    let last = (days.len() - 1) as i64;
    let start_offset = (assignment.span.start - days[0]).num_days().clamp(0, last) as u32;
    let end_offset = (assignment.span.end - days[0]).num_days().clamp(0, last) as u32;
    let (column_start, column_end) = match granularity {
        Granularity::Quarter => (start_offset / 7 + 1, end_offset / 7 + 2),
        Granularity::Week | Granularity::Month => (start_offset + 1, end_offset + 2),
    };
    let (compact, hidden) = hints(granularity, column_end - column_start);
    GridPlacement {
        assignment_id: assignment.id.clone(),
        column_start,
        column_end,
        row,
        compact,
        hidden,
    }
}

// UNIT TESTS
