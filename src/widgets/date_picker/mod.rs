// SPDX-License-Identifier: MPL-2.0

//! Column-based date picker bounded by a global date range.
//!
//! Produces exactly three columns (year, month, day). The month and day
//! columns are range-truncated only at the boundary edges: away from the
//! boundary year/month they span the full calendar, and the day column
//! always ends at the real last day of the selected month.

mod bounds;
mod state;

pub use bounds::{boundary_for, days_in_month, range_column, Edge, SimpleDate};
pub use state::DatePickerState;
