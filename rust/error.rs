//! Error types for the availability engine.
//!
//! Every failure in this layer is local and recoverable: malformed input is
//! excluded from computation and reported, it never aborts the surrounding
//! application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error type used throughout the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleError {
    /// A date string could not be parsed as an ISO calendar date.
    #[error("unparseable date: `{value}`")]
    UnparseableDate {
        /// The raw value received from the data-fetch layer.
        value: String,
    },

    /// An interval whose end precedes its start.
    #[error("inverted date range: {start} > {end}")]
    InvertedRange {
        /// The claimed start of the range.
        start: String,
        /// The claimed end of the range.
        end: String,
    },

    /// A granularity name other than `week`, `month` or `quarter`.
    #[error("unknown granularity: `{value}`")]
    UnknownGranularity {
        /// The raw value received from the view parameters.
        value: String,
    },
}
