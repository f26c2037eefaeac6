// SPDX-License-Identifier: MPL-2.0

//! State management for the column-based date picker.

use super::bounds::{boundary_for, range_column, Edge, SimpleDate};
use crate::widgets::cascade::{Column, IndexPath, PickerEvent};
use crate::widgets::mask::MaskState;

/// State for a three-column (year, month, day) picker bounded by a global
/// date range.
///
/// The committed date is the single source of truth; the index vector and
/// the columns are both derived from it, so a rebuilt shorter column can
/// never leave a dangling index.
#[derive(Debug, Clone)]
pub struct DatePickerState {
    start: SimpleDate,
    end: SimpleDate,
    current: SimpleDate,
    mask: MaskState,
}

impl Default for DatePickerState {
    fn default() -> Self {
        Self::new(SimpleDate::new(2016, 6, 1), SimpleDate::today(), SimpleDate::today())
    }
}

impl DatePickerState {
    pub fn new(start: SimpleDate, end: SimpleDate, value: SimpleDate) -> Self {
        let mut state = Self {
            start,
            end,
            current: value,
            mask: MaskState::default(),
        };
        state.normalize();
        state
    }

    /// The currently committed date.
    pub fn value(&self) -> SimpleDate {
        self.current
    }

    /// Year, month and day columns, range-truncated at the boundary edges.
    ///
    /// An inverted global range surfaces as empty columns, not a panic.
    pub fn columns(&self) -> Vec<Column> {
        let start = boundary_for(Edge::Start, self.start, self.current.year, self.current.month);
        let end = boundary_for(Edge::End, self.end, self.current.year, self.current.month);

        vec![
            range_column(start.year, end.year),
            range_column(start.month as i32, end.month as i32),
            range_column(start.day as i32, end.day as i32),
        ]
    }

    /// The committed date as per-column offsets into [`columns`](Self::columns).
    pub fn index(&self) -> IndexPath {
        let start = boundary_for(Edge::Start, self.start, self.current.year, self.current.month);
        vec![
            (self.current.year - start.year).max(0) as usize,
            self.current.month.saturating_sub(start.month) as usize,
            self.current.day.saturating_sub(start.day) as usize,
        ]
    }

    /// Applies a reported index vector from the scroller.
    ///
    /// Indices are read against the columns as currently displayed
    /// (clamped to the last entry when stale), then the boundaries are
    /// recomputed for the new year/month and the month and day clamp into
    /// the rebuilt ranges.
    pub fn apply_change(&mut self, reported: &[usize]) {
        let columns = self.columns();
        let mut parts = [
            self.current.year,
            self.current.month as i32,
            self.current.day as i32,
        ];

        for (col, column) in columns.iter().enumerate() {
            if column.is_empty() {
                continue;
            }
            let idx = reported.get(col).copied().unwrap_or(0).min(column.len() - 1);
            if let Ok(value) = column[idx].value.parse::<i32>() {
                parts[col] = value;
            }
        }

        self.current = SimpleDate::new(parts[0], parts[1] as u32, parts[2] as u32);
        self.normalize();
    }

    /// Reduces a collaborator event into the state.
    ///
    /// Returns the date when the event confirmed one.
    pub fn update(&mut self, event: PickerEvent) -> Option<SimpleDate> {
        match event {
            PickerEvent::Open => {
                self.open();
                None
            }
            PickerEvent::Changed(reported) => {
                self.apply_change(&reported);
                None
            }
            PickerEvent::Confirm => Some(self.confirm()),
            PickerEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }

    pub fn open(&mut self) {
        self.mask.show();
    }

    /// Commits the current date and begins closing the overlay.
    pub fn confirm(&mut self) -> SimpleDate {
        self.mask.request_hide();
        self.current
    }

    /// Dismisses the overlay without committing.
    pub fn cancel(&mut self) -> bool {
        self.mask.request_hide()
    }

    pub fn mask(&self) -> &MaskState {
        &self.mask
    }

    pub fn mask_mut(&mut self) -> &mut MaskState {
        &mut self.mask
    }

    /// Clamps the committed date into the boundary-derived ranges, day
    /// last so it lands inside the possibly shortened month.
    fn normalize(&mut self) {
        if self.start.year <= self.end.year {
            self.current.year = self.current.year.clamp(self.start.year, self.end.year);
        }

        let month_lo = boundary_for(Edge::Start, self.start, self.current.year, self.current.month).month;
        let month_hi = boundary_for(Edge::End, self.end, self.current.year, self.current.month).month;
        if month_lo <= month_hi {
            self.current.month = self.current.month.clamp(month_lo, month_hi);
        }

        let day_lo = boundary_for(Edge::Start, self.start, self.current.year, self.current.month).day;
        let day_hi = boundary_for(Edge::End, self.end, self.current.year, self.current.month).day;
        if day_lo <= day_hi {
            self.current.day = self.current.day.clamp(day_lo, day_hi);
        }
    }
}
