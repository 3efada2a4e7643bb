//! Calendar bucketing over an in-memory list of records.
//!
//! Everything here is pure: callers fetch the records once, snapshot
//! "today", and pass both in. The week anchor day is an explicit
//! parameter threaded down from configuration, it is never read from
//! process-wide locale state.

use std::collections::HashMap;

use time::{Date, Duration, Month, Weekday};

use crate::domain::models::TimeRecord;

/// Number of buckets in the rolling weekly window.
pub const WEEKS_IN_WINDOW: usize = 8;

/// Number of buckets in the rolling monthly window.
pub const MONTHS_IN_WINDOW: usize = 6;

/// A year/month pair, the key of a monthly bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year/month `back` whole months before this one.
    pub fn months_back(self, back: u32) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        for _ in 0..back {
            if month == Month::January {
                year -= 1;
            }
            month = month.previous();
        }
        Self { year, month }
    }

    /// Whole months from `other` up to this one. Negative when `other`
    /// is in the future relative to this one.
    pub fn months_since(self, other: Self) -> i64 {
        (self.year as i64 - other.year as i64) * 12
            + (self.month as u8 as i64 - other.month as u8 as i64)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

/// The most recent day on or before `date` that falls on `week_start`.
pub fn week_anchor(date: Date, week_start: Weekday) -> Date {
    let days_into_week = (7 + date.weekday().number_days_from_sunday() as i64
        - week_start.number_days_from_sunday() as i64)
        % 7;
    date - Duration::days(days_into_week)
}

/// Sum hours per distinct calendar date.
///
/// One bucket per date that actually appears, no zero-filling. Buckets
/// come back in insertion order of first occurrence, which is whatever
/// order the store returned the records in.
pub fn daily_totals(records: &[TimeRecord]) -> Vec<(Date, f64)> {
    let mut totals: Vec<(Date, f64)> = Vec::new();
    let mut index: HashMap<Date, usize> = HashMap::new();

    for record in records {
        match index.get(&record.date) {
            Some(&i) => totals[i].1 += record.hours,
            None => {
                index.insert(record.date, totals.len());
                totals.push((record.date, record.hours));
            }
        }
    }

    totals
}

/// Sum hours into the rolling 8-week window ending at `today`'s week.
///
/// Always returns exactly [`WEEKS_IN_WINDOW`] buckets, oldest week
/// first, each keyed by its week-start day. Records whose week is not
/// among the most recent 8 (including future weeks) are dropped.
pub fn weekly_totals(
    records: &[TimeRecord],
    today: Date,
    week_start: Weekday,
) -> Vec<(Date, f64)> {
    let anchor = week_anchor(today, week_start);

    // Index 0 is the current week while accumulating, reversed on return.
    let mut buckets: Vec<(Date, f64)> = (0..WEEKS_IN_WINDOW)
        .map(|i| (anchor - Duration::weeks(i as i64), 0.0))
        .collect();

    for record in records {
        let record_anchor = week_anchor(record.date, week_start);
        let weeks_ago = (anchor - record_anchor).whole_weeks();
        if (0..WEEKS_IN_WINDOW as i64).contains(&weeks_ago) {
            buckets[weeks_ago as usize].1 += record.hours;
        }
    }

    buckets.reverse();
    buckets
}

/// Sum hours into the rolling 6-month window ending at `today`'s month.
///
/// Returns exactly [`MONTHS_IN_WINDOW`] buckets, oldest month first,
/// when any record exists; an empty vec when none do. (The weekly
/// window has no such empty-input special case. The asymmetry is
/// long-standing observable behavior, keep it.)
pub fn monthly_totals(records: &[TimeRecord], today: Date) -> Vec<(YearMonth, f64)> {
    if records.is_empty() {
        return Vec::new();
    }

    let current = YearMonth::of(today);
    let mut buckets: Vec<(YearMonth, f64)> = (0..MONTHS_IN_WINDOW)
        .map(|i| (current.months_back(i as u32), 0.0))
        .collect();

    for record in records {
        let months_ago = current.months_since(YearMonth::of(record.date));
        if (0..MONTHS_IN_WINDOW as i64).contains(&months_ago) {
            buckets[months_ago as usize].1 += record.hours;
        }
    }

    buckets.reverse();
    buckets
}
