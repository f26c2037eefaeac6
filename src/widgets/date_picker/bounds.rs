// SPDX-License-Identifier: MPL-2.0

//! Boundary computation for the year/month/day columns.

use chrono::{Datelike, Local, NaiveDate};

use crate::widgets::cascade::{Column, ColumnItem};

/// A plain calendar date used as a picker value or range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimpleDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SimpleDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today in the local timezone.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Parses `"2018/6/1"` or `"2018-06-01"`; components need not be
    /// zero-padded. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y/%m/%d")
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .ok()
            .map(Into::into)
    }

    /// The corresponding `chrono` date, if the components form one.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for SimpleDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Which end of the global range a boundary is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Number of days in the given month, with the Gregorian leap rule for
/// February (divisible by 4, not by 100 unless by 400).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Effective boundary for one edge of the range, given the committed
/// year/month selection.
///
/// Away from the boundary year the month spans the full calendar (1 for
/// the start edge, 12 for the end edge) and the day spans the month (1, or
/// the month's last day for the end edge). When the current year equals
/// the boundary year the month clamps to the boundary month, and when the
/// current month also equals that month the day clamps to the boundary
/// day.
pub fn boundary_for(
    edge: Edge,
    bound: SimpleDate,
    current_year: i32,
    current_month: u32,
) -> SimpleDate {
    let mut month = 1;
    let mut day = 1;

    if edge == Edge::End {
        month = 12;
        day = days_in_month(current_year, current_month);
    }

    if current_year == bound.year {
        month = bound.month;
        if current_month == month {
            day = bound.day;
        }
    }

    SimpleDate::new(bound.year, month, day)
}

/// Renders an inclusive integer range as a picker column, labels
/// zero-padded to two digits with the plain integer value underneath.
/// An inverted range yields an empty column.
pub fn range_column(start: i32, end: i32) -> Column {
    if end < start {
        return Column::new();
    }
    (start..=end)
        .map(|n| ColumnItem::new(format!("{n:02}"), n.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_the_leap_rule() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn other_months_have_fixed_lengths() {
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn start_boundary_clamps_at_the_boundary_year_and_month() {
        let start = SimpleDate::new(2018, 6, 1);

        let at_edge = boundary_for(Edge::Start, start, 2018, 6);
        assert_eq!((at_edge.month, at_edge.day), (6, 1));

        let same_year = boundary_for(Edge::Start, start, 2018, 9);
        assert_eq!((same_year.month, same_year.day), (6, 1));

        let later_year = boundary_for(Edge::Start, start, 2019, 6);
        assert_eq!((later_year.month, later_year.day), (1, 1));
    }

    #[test]
    fn end_boundary_defaults_to_month_end() {
        let end = SimpleDate::new(2020, 3, 15);

        let earlier_year = boundary_for(Edge::End, end, 2019, 2);
        assert_eq!((earlier_year.month, earlier_year.day), (12, 28));

        let boundary_year = boundary_for(Edge::End, end, 2020, 3);
        assert_eq!((boundary_year.month, boundary_year.day), (3, 15));

        let boundary_year_earlier_month = boundary_for(Edge::End, end, 2020, 1);
        assert_eq!((boundary_year_earlier_month.month, boundary_year_earlier_month.day), (3, 31));
    }

    #[test]
    fn range_column_pads_labels_and_keeps_integer_values() {
        let column = range_column(6, 8);
        let labels: Vec<_> = column.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["06", "07", "08"]);
        assert_eq!(column[0].value, "6");
    }

    #[test]
    fn inverted_range_yields_an_empty_column() {
        assert!(range_column(9, 3).is_empty());
    }

    #[test]
    fn parse_accepts_both_separators_without_padding() {
        assert_eq!(SimpleDate::parse("2018/6/1"), Some(SimpleDate::new(2018, 6, 1)));
        assert_eq!(SimpleDate::parse("2018-06-01"), Some(SimpleDate::new(2018, 6, 1)));
        assert_eq!(SimpleDate::parse("junk"), None);
    }
}
