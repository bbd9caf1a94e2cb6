//! Canonical calendar days.
//!
//! Every date comparison in the tracker goes through [`CalendarDay`]. A
//! timestamp is reduced to the wall-clock date in its own offset, so a value
//! created late in the evening west of UTC still lands on the day the user saw.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, TimeZone, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{TrackerError, TrackerResult};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A date reduced to year-month-day, with no time of day and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Normalize a timestamp to the day shown on its own wall clock.
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }

    pub fn today() -> Self {
        Self::from_instant(&Local::now())
    }

    pub fn parse(input: &str) -> TrackerResult<Self> {
        NaiveDate::parse_from_str(input.trim(), CANONICAL_FORMAT)
            .map(Self)
            .map_err(|_| TrackerError::InvalidDate(input.trim().to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_of_month().0;
        match first.checked_add_months(Months::new(1)) {
            Some(next) => next.signed_duration_since(first).num_days() as u32,
            // Only reachable at the very end of chrono's supported range.
            None => 31,
        }
    }

    /// Shift by whole days, saturating at the ends of the supported range.
    pub fn add_days(&self, days: i64) -> Self {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Shift by whole months; the day is clamped to the target month's length.
    pub fn add_months(&self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(Self).unwrap_or(*self)
    }

    /// Long human label, e.g. `Fri Jan 10 2025`.
    pub fn long_label(&self) -> String {
        self.0.format("%a %b %d %Y").to_string()
    }

    /// Month heading, e.g. `January 2025`.
    pub fn month_label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_display_round_trip_canonical_form() {
        let parsed = CalendarDay::parse("2025-01-05").unwrap();
        assert_eq!(parsed, day(2025, 1, 5));
        assert_eq!(parsed.to_string(), "2025-01-05");
        assert_eq!(" 2025-01-10 ".parse::<CalendarDay>().unwrap(), day(2025, 1, 10));
    }

    #[test]
    fn test_parse_rejects_other_forms() {
        assert!(matches!(
            CalendarDay::parse("01/05/2025"),
            Err(TrackerError::InvalidDate(_))
        ));
        assert!(CalendarDay::parse("2025-02-30").is_err());
        assert!(CalendarDay::parse("").is_err());
    }

    #[test]
    fn test_from_instant_keeps_wall_clock_date() {
        let west = FixedOffset::west_opt(8 * 3600).unwrap();
        let late_evening = west.with_ymd_and_hms(2025, 1, 5, 23, 30, 0).unwrap();
        assert_eq!(CalendarDay::from_instant(&late_evening), day(2025, 1, 5));

        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        let just_after_midnight = east.with_ymd_and_hms(2025, 1, 5, 0, 10, 0).unwrap();
        assert_eq!(CalendarDay::from_instant(&just_after_midnight), day(2025, 1, 5));

        // The same instants in UTC would fall on other days.
        assert_eq!(
            CalendarDay::from_instant(&late_evening.with_timezone(&Utc)),
            day(2025, 1, 6)
        );
        assert_eq!(
            CalendarDay::from_instant(&just_after_midnight.with_timezone(&Utc)),
            day(2025, 1, 4)
        );
    }

    #[test]
    fn test_month_arithmetic_clamps_day() {
        assert_eq!(day(2025, 1, 31).add_months(1), day(2025, 2, 28));
        assert_eq!(day(2024, 3, 31).add_months(-1), day(2024, 2, 29));
        assert_eq!(day(2025, 12, 15).add_months(1), day(2026, 1, 15));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(day(2025, 1, 10).days_in_month(), 31);
        assert_eq!(day(2025, 2, 1).days_in_month(), 28);
        assert_eq!(day(2024, 2, 1).days_in_month(), 29);
        assert_eq!(day(2025, 4, 30).days_in_month(), 30);
    }

    #[test]
    fn test_labels() {
        assert_eq!(day(2025, 1, 10).long_label(), "Fri Jan 10 2025");
        assert_eq!(day(2025, 1, 10).month_label(), "January 2025");
    }
}
