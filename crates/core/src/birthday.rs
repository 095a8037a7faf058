//! Birthday-window calculation for the upcoming-birthdays query.
//!
//! A contact has an upcoming birthday when the month and day of its date of
//! birth (year ignored, so contacts of any birth year match) fall within the
//! inclusive 8-day window `[today, today + 7 days]`. When the window crosses
//! a month boundary the single day-range comparison breaks down, so the
//! predicate splits into a tail-of-start-month range and a
//! head-of-end-month range.

use chrono::{Datelike, Days, NaiveDate};

/// Days of lookahead beyond today.
pub const WINDOW_DAYS: u64 = 7;

/// An inclusive month/day window anchored at a concrete start date.
///
/// Only month and day numbers are kept; birth years never participate in
/// matching. The repository layer translates this into `EXTRACT`-based SQL,
/// and [`BirthdayWindow::contains`] mirrors that SQL exactly so the
/// predicate stays unit-testable without a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl BirthdayWindow {
    /// Build the window `[today, today + 7 days]`.
    pub fn starting(today: NaiveDate) -> Self {
        let end = today + Days::new(WINDOW_DAYS);
        Self {
            start_month: today.month(),
            start_day: today.day(),
            end_month: end.month(),
            end_day: end.day(),
        }
    }

    /// Whether the window crosses into a different month.
    ///
    /// A December window rolling into January counts like any other
    /// boundary: the months differ, so the split predicate applies and the
    /// year wrap needs no special case.
    pub fn spans_month_boundary(&self) -> bool {
        self.start_month != self.end_month
    }

    /// Whether a birthday on `(month, day)` falls inside the window.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        if self.spans_month_boundary() {
            (month == self.start_month && day >= self.start_day)
                || (month == self.end_month && day <= self.end_day)
        } else {
            month == self.start_month && day >= self.start_day && day <= self.end_day
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn window(y: i32, m: u32, d: u32) -> BirthdayWindow {
        BirthdayWindow::starting(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    // -- window construction -------------------------------------------------

    #[test]
    fn mid_month_window_stays_in_month() {
        let w = window(2024, 6, 1);
        assert_eq!((w.start_month, w.start_day), (6, 1));
        assert_eq!((w.end_month, w.end_day), (6, 8));
        assert!(!w.spans_month_boundary());
    }

    #[test]
    fn late_month_window_crosses_boundary() {
        let w = window(2024, 6, 28);
        assert_eq!((w.start_month, w.start_day), (6, 28));
        assert_eq!((w.end_month, w.end_day), (7, 5));
        assert!(w.spans_month_boundary());
    }

    #[test]
    fn december_window_wraps_into_january() {
        let w = window(2024, 12, 28);
        assert_eq!((w.start_month, w.start_day), (12, 28));
        assert_eq!((w.end_month, w.end_day), (1, 4));
        assert!(w.spans_month_boundary());
    }

    #[test]
    fn leap_february_window_uses_day_29() {
        let w = window(2024, 2, 22);
        assert_eq!((w.end_month, w.end_day), (2, 29));
        assert!(!w.spans_month_boundary());
    }

    #[test]
    fn non_leap_february_window_crosses_into_march() {
        let w = window(2023, 2, 22);
        assert_eq!((w.end_month, w.end_day), (3, 1));
        assert!(w.spans_month_boundary());
    }

    // -- same-month matching -------------------------------------------------

    #[test]
    fn same_month_matches_inside_range() {
        let w = window(2024, 6, 1);
        assert!(w.contains(6, 5));
    }

    #[test]
    fn same_month_matches_both_endpoints() {
        let w = window(2024, 6, 1);
        assert!(w.contains(6, 1));
        assert!(w.contains(6, 8));
    }

    #[test]
    fn same_month_rejects_day_after_end() {
        let w = window(2024, 6, 1);
        assert!(!w.contains(6, 9));
    }

    #[test]
    fn same_month_rejects_other_month() {
        let w = window(2024, 6, 1);
        assert!(!w.contains(5, 30));
    }

    // -- month-boundary matching ---------------------------------------------

    #[test]
    fn boundary_matches_tail_of_start_month() {
        let w = window(2024, 6, 28);
        assert!(w.contains(6, 30));
    }

    #[test]
    fn boundary_matches_head_of_end_month() {
        let w = window(2024, 6, 28);
        assert!(w.contains(7, 3));
    }

    #[test]
    fn boundary_rejects_day_past_end() {
        let w = window(2024, 6, 28);
        assert!(!w.contains(7, 10));
    }

    #[test]
    fn boundary_rejects_start_month_day_before_window() {
        let w = window(2024, 6, 28);
        assert!(!w.contains(6, 27));
    }

    // -- year wrap -----------------------------------------------------------

    #[test]
    fn year_wrap_matches_late_december() {
        let w = window(2024, 12, 28);
        assert!(w.contains(12, 30));
    }

    #[test]
    fn year_wrap_matches_early_january() {
        let w = window(2024, 12, 28);
        assert!(w.contains(1, 3));
    }

    #[test]
    fn year_wrap_rejects_mid_january() {
        let w = window(2024, 12, 28);
        assert!(!w.contains(1, 10));
    }

    #[test]
    fn year_wrap_rejects_mid_december() {
        let w = window(2024, 12, 28);
        assert!(!w.contains(12, 15));
    }
}
