use serde::{Deserialize, Serialize};

use super::{GoalId, UserId};

/// A target with a total-hours budget, tracking cumulative invested
/// hours and a clamped progress ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub user_id: UserId,
    pub name: String,
    pub total_hours: f64,
    pub invested_hours: f64,
    pub progress: f64,
}

impl Goal {
    /// Credit logged hours to this goal and recompute progress.
    ///
    /// Progress is `invested / total` clamped to 1.0. A zero-hour budget
    /// divides to infinity (or NaN for 0/0) and clamps to 1.0 either way,
    /// so a fully unbudgeted goal reads as complete.
    pub fn apply_time(&mut self, hours: f64) {
        self.invested_hours += hours;
        self.progress = (self.invested_hours / self.total_hours).min(1.0);
    }
}

/// A goal as submitted by a client, before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub user_id: UserId,
    pub name: String,
    pub total_hours: f64,
}
