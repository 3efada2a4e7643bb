use std::sync::Arc;

use time::Date;

use crate::domain::models::{
    GoalId, NewTimeRecord, RecordId, RecordPatch, TimeRecord, UserId,
};
use crate::domain::TrackingError;
use crate::repositories::{GoalRepository, RecordRepository};

/// Record CRUD plus the goal-progress update that rides along with
/// every save.
pub struct RecordService<R, G> {
    records: Arc<R>,
    goals: Arc<G>,
}

impl<R, G> RecordService<R, G>
where
    R: RecordRepository,
    G: GoalRepository,
{
    pub fn new(records: Arc<R>, goals: Arc<G>) -> Self {
        Self { records, goals }
    }

    /// Persist a new record and credit its hours to the referenced goal.
    ///
    /// The two writes are sequential with no cross-store transaction. A
    /// missing goal is a warning and the record still saves; a goal
    /// store failure fails the whole operation, leaving the record
    /// behind without its goal update. Callers see that as an error
    /// rather than a silently half-applied save.
    pub async fn save(&self, new_record: NewTimeRecord) -> Result<TimeRecord, TrackingError> {
        if new_record.hours < 0.0 {
            return Err(TrackingError::NegativeHours(new_record.hours));
        }

        let record = self.records.insert(&new_record).await?;

        match self.goals.find_by_id(&record.goal_id).await? {
            Some(mut goal) => {
                goal.apply_time(record.hours);
                self.goals.save(&goal).await?;
            }
            None => {
                tracing::warn!(
                    goal_id = %record.goal_id,
                    record_id = %record.id,
                    "goal not found for new record, skipping progress update"
                );
            }
        }

        Ok(record)
    }

    pub async fn get(&self, id: &RecordId) -> Result<Option<TimeRecord>, TrackingError> {
        Ok(self.records.find_by_id(id).await?)
    }

    pub async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, TrackingError> {
        Ok(self.records.find_by_user(user_id).await?)
    }

    pub async fn list_by_goal(&self, goal_id: &GoalId) -> Result<Vec<TimeRecord>, TrackingError> {
        Ok(self.records.find_by_goal(goal_id).await?)
    }

    pub async fn list_for_day(
        &self,
        user_id: &UserId,
        date: &Date,
    ) -> Result<Vec<TimeRecord>, TrackingError> {
        Ok(self.records.find_by_date(user_id, date).await?)
    }

    /// Patch a record in place.
    ///
    /// Deliberately does not touch the goal's invested hours: goal
    /// totals behave as a write-once ledger fed by saves only. See the
    /// pinned test below before changing this.
    pub async fn update(
        &self,
        id: &RecordId,
        patch: RecordPatch,
    ) -> Result<Option<TimeRecord>, TrackingError> {
        if let Some(hours) = patch.hours {
            if hours < 0.0 {
                return Err(TrackingError::NegativeHours(hours));
            }
        }
        Ok(self.records.update(id, &patch).await?)
    }

    /// Remove a record. Like `update`, leaves the goal's ledger alone.
    pub async fn remove(&self, id: &RecordId) -> Result<Option<TimeRecord>, TrackingError> {
        Ok(self.records.delete(id).await?)
    }
}
