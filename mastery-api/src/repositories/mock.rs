//! In-memory repository implementations for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use time::Date;

use super::repo_error::RepositoryError;
use super::{GoalRepository, RecordRepository};
use crate::domain::models::{
    Goal, GoalId, NewGoal, NewTimeRecord, RecordId, RecordPatch, TimeRecord, UserId,
};

/// Mock record store backed by an in-memory map, keyed by record id.
///
/// Ids are handed out sequentially starting at 1, like a SERIAL column.
#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<RwLock<HashMap<i32, TimeRecord>>>,
    next_id: Arc<RwLock<i32>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Seed the store with existing records. Ids must already be set
    /// and the sequence advances past the largest one.
    pub fn with_records(self, records: Vec<TimeRecord>) -> Self {
        {
            let mut map = self.records.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            for record in records {
                *next_id = (*next_id).max(record.id.as_i32() + 1);
                map.insert(record.id.as_i32(), record);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, RepositoryError> {
        let mut records: Vec<TimeRecord> = self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id.as_i32());
        Ok(records)
    }

    async fn find_by_goal(&self, goal_id: &GoalId) -> Result<Vec<TimeRecord>, RepositoryError> {
        let mut records: Vec<TimeRecord> = self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|r| r.goal_id == *goal_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id.as_i32());
        Ok(records)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<TimeRecord>, RepositoryError> {
        Ok(self.records.read().unwrap().get(&id.as_i32()).cloned())
    }

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: &Date,
    ) -> Result<Vec<TimeRecord>, RepositoryError> {
        let mut records: Vec<TimeRecord> = self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|r| r.user_id == *user_id && r.date == *date)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id.as_i32());
        Ok(records)
    }

    async fn insert(&self, record: &NewTimeRecord) -> Result<TimeRecord, RepositoryError> {
        let mut next_id = self.next_id.write().unwrap();
        let id = *next_id;
        *next_id += 1;

        let record = TimeRecord {
            id: RecordId::new(id),
            user_id: record.user_id,
            goal_id: record.goal_id,
            date: record.date,
            hours: record.hours,
        };
        self.records.write().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> Result<Option<TimeRecord>, RepositoryError> {
        let mut map = self.records.write().unwrap();
        Ok(map.get_mut(&id.as_i32()).map(|record| {
            if let Some(goal_id) = patch.goal_id {
                record.goal_id = goal_id;
            }
            if let Some(date) = patch.date {
                record.date = date;
            }
            if let Some(hours) = patch.hours {
                record.hours = hours;
            }
            record.clone()
        }))
    }

    async fn delete(&self, id: &RecordId) -> Result<Option<TimeRecord>, RepositoryError> {
        Ok(self.records.write().unwrap().remove(&id.as_i32()))
    }
}

/// Mock goal store. Can be told to fail the next `save` to exercise
/// the partial-failure path of a record save.
#[derive(Clone, Default)]
pub struct MockGoalRepository {
    goals: Arc<RwLock<HashMap<i32, Goal>>>,
    next_id: Arc<RwLock<i32>>,
    fail_saves: Arc<RwLock<bool>>,
}

#[allow(dead_code)]
impl MockGoalRepository {
    pub fn new() -> Self {
        Self {
            goals: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            fail_saves: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_goals(self, goals: Vec<Goal>) -> Self {
        {
            let mut map = self.goals.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            for goal in goals {
                *next_id = (*next_id).max(goal.id.as_i32() + 1);
                map.insert(goal.id.as_i32(), goal);
            }
        }
        self
    }

    /// Make every subsequent `save` report a database failure.
    pub fn failing_saves(self) -> Self {
        *self.fail_saves.write().unwrap() = true;
        self
    }

    pub fn get(&self, id: &GoalId) -> Option<Goal> {
        self.goals.read().unwrap().get(&id.as_i32()).cloned()
    }
}

#[async_trait]
impl GoalRepository for MockGoalRepository {
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, RepositoryError> {
        Ok(self.goals.read().unwrap().get(&id.as_i32()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Goal>, RepositoryError> {
        let mut goals: Vec<Goal> = self
            .goals
            .read()
            .unwrap()
            .values()
            .filter(|g| g.user_id == *user_id)
            .cloned()
            .collect();
        goals.sort_by_key(|g| g.id.as_i32());
        Ok(goals)
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, RepositoryError> {
        let mut next_id = self.next_id.write().unwrap();
        let id = *next_id;
        *next_id += 1;

        let goal = Goal {
            id: GoalId::new(id),
            user_id: goal.user_id,
            name: goal.name.clone(),
            total_hours: goal.total_hours,
            invested_hours: 0.0,
            progress: 0.0,
        };
        self.goals.write().unwrap().insert(id, goal.clone());
        Ok(goal)
    }

    async fn save(&self, goal: &Goal) -> Result<(), RepositoryError> {
        if *self.fail_saves.read().unwrap() {
            return Err(RepositoryError::DatabaseError(sqlx::Error::PoolClosed));
        }

        let mut map = self.goals.write().unwrap();
        if !map.contains_key(&goal.id.as_i32()) {
            return Err(RepositoryError::NotFound(goal.id.to_string()));
        }
        map.insert(goal.id.as_i32(), goal.clone());
        Ok(())
    }
}
