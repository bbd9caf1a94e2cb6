//! Seeded communication events, queryable by canonical day.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::CalendarDay;

/// One date-stamped communication obligation tied to a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub date: CalendarDay,
    pub company: String,
    pub label: String,
}

impl EventRecord {
    pub fn new(date: CalendarDay, company: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            date,
            company: company.into(),
            label: label.into(),
        }
    }

    /// `company: label`, the form used in the day detail list.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.company, self.label)
    }
}

const SEED: [(i32, u32, u32, &str, &str); 3] = [
    (2025, 1, 5, "Company A", "Communication Due"),
    (2025, 1, 10, "Company B", "Follow-up Call Due"),
    (2025, 1, 15, "Company C", "LinkedIn Post Due"),
];

/// Immutable, ordered event collection.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    records: Vec<EventRecord>,
}

impl EventStore {
    pub fn from_records(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    /// The sample schedule the dashboard ships with.
    pub fn seeded() -> Self {
        let records = SEED
            .iter()
            .filter_map(|&(year, month, day, company, label)| {
                CalendarDay::new(year, month, day).map(|date| EventRecord::new(date, company, label))
            })
            .collect();
        Self { records }
    }

    /// All records on `day`, in seed order. Never fails; an unknown day is empty.
    pub fn lookup(&self, day: CalendarDay) -> Vec<&EventRecord> {
        self.records.iter().filter(|record| record.date == day).collect()
    }

    pub fn lookup_instant<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Vec<&EventRecord> {
        self.lookup(CalendarDay::from_instant(instant))
    }

    pub fn count_on(&self, day: CalendarDay) -> usize {
        self.records.iter().filter(|record| record.date == day).count()
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
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
    fn test_seed_order_and_contents() {
        let store = EventStore::seeded();
        assert_eq!(store.len(), 3);
        let summaries: Vec<String> = store.records().iter().map(EventRecord::summary).collect();
        assert_eq!(
            summaries,
            vec![
                "Company A: Communication Due",
                "Company B: Follow-up Call Due",
                "Company C: LinkedIn Post Due",
            ]
        );
    }

    #[test]
    fn test_lookup_seeded_day() {
        let store = EventStore::seeded();
        let found = store.lookup(day(2025, 1, 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].company, "Company B");
        assert_eq!(found[0].label, "Follow-up Call Due");
        assert_eq!(store.count_on(day(2025, 1, 10)), 1);
    }

    #[test]
    fn test_lookup_unseeded_days_are_empty() {
        let store = EventStore::seeded();
        let mut cursor = day(2024, 12, 1);
        while cursor < day(2025, 3, 1) {
            let expected = store.records().iter().any(|r| r.date == cursor);
            assert_eq!(!store.lookup(cursor).is_empty(), expected, "day {cursor}");
            cursor = cursor.add_days(1);
        }
        assert!(store.lookup(day(2025, 1, 6)).is_empty());
        assert_eq!(store.count_on(day(2025, 1, 6)), 0);
    }

    #[test]
    fn test_lookup_returns_all_records_on_shared_day_in_order() {
        let shared = day(2025, 2, 3);
        let store = EventStore::from_records(vec![
            EventRecord::new(shared, "Company A", "Email Due"),
            EventRecord::new(day(2025, 2, 4), "Company B", "Visit"),
            EventRecord::new(shared, "Company C", "Call Due"),
        ]);
        let companies: Vec<&str> = store
            .lookup(shared)
            .iter()
            .map(|r| r.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Company A", "Company C"]);
        assert_eq!(store.count_on(shared), 2);
    }

    #[test]
    fn test_lookup_instant_ignores_offset() {
        let store = EventStore::seeded();
        let west = FixedOffset::west_opt(10 * 3600).unwrap();
        let east = FixedOffset::east_opt(13 * 3600).unwrap();
        let late = west.with_ymd_and_hms(2025, 1, 5, 23, 59, 0).unwrap();
        let early = east.with_ymd_and_hms(2025, 1, 5, 0, 1, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();

        for found in [
            store.lookup_instant(&late),
            store.lookup_instant(&early),
            store.lookup_instant(&noon),
        ] {
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].summary(), "Company A: Communication Due");
        }
    }
}
