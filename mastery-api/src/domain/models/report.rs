use serde::Serialize;

use super::GoalId;

/// One aggregation bucket for a goal-scoped report.
///
/// `period` is "YYYY-MM-DD" for daily and weekly buckets (the bucket's
/// start day) and "YYYY-MM" for monthly buckets. The goal name is
/// resolved through the goal store at report time; a goal that has been
/// deleted out from under its records reports as "Unknown Goal".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalBucket {
    pub goal_id: GoalId,
    pub goal_name: String,
    pub period: String,
    pub total_hours: f64,
}

/// One aggregation bucket for a user-scoped report. Carries no goal
/// name, user reports span all of a user's goals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBucket {
    pub period: String,
    pub total_hours: f64,
}
