use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use super::{GoalId, RecordId, UserId};

const DAY_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Format a date as YYYY-MM-DD, the key used for daily buckets.
pub fn format_day(date: Date) -> String {
    // The format description is const-checked, formatting a valid Date
    // into it cannot fail.
    date.format(&DAY_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a YYYY-MM-DD string into a date.
pub fn parse_day(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &DAY_FORMAT)
}

/// A single logged time entry against a goal.
///
/// Dates carry date-only semantics: the original entry may have been
/// submitted with a time of day, but everything downstream compares
/// whole calendar days.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub goal_id: GoalId,
    pub date: Date,
    pub hours: f64,
}

/// A record as submitted by a client, before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeRecord {
    pub user_id: UserId,
    pub goal_id: GoalId,
    pub date: Date,
    pub hours: f64,
}

/// Partial update of an existing record. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    pub goal_id: Option<GoalId>,
    pub date: Option<Date>,
    pub hours: Option<f64>,
}
