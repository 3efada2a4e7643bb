use std::sync::Arc;

use time::{Date, OffsetDateTime, Weekday};

use super::aggregation::{daily_totals, monthly_totals, weekly_totals};
use crate::domain::models::{format_day, GoalBucket, GoalId, UserBucket, UserId};
use crate::domain::TrackingError;
use crate::repositories::{GoalRepository, RecordRepository};

/// Name reported for goal-scoped aggregations when the goal no longer
/// exists in the goal store.
const UNKNOWN_GOAL: &str = "Unknown Goal";

/// Builds calendar-bucketed reports. Each call does one bulk read from
/// the record store, then buckets in memory.
///
/// "Now" is sampled per call, so results spanning a week or month
/// boundary can differ between calls. That is accepted; the pure
/// functions in [`super::aggregation`] take an explicit snapshot for
/// callers that need stability.
pub struct ReportService<R, G> {
    records: Arc<R>,
    goals: Arc<G>,
    week_start: Weekday,
}

impl<R, G> ReportService<R, G>
where
    R: RecordRepository,
    G: GoalRepository,
{
    pub fn new(records: Arc<R>, goals: Arc<G>, week_start: Weekday) -> Self {
        Self {
            records,
            goals,
            week_start,
        }
    }

    fn today() -> Date {
        OffsetDateTime::now_utc().date()
    }

    async fn goal_name(&self, goal_id: &GoalId) -> Result<String, TrackingError> {
        Ok(self
            .goals
            .find_by_id(goal_id)
            .await?
            .map(|g| g.name)
            .unwrap_or_else(|| UNKNOWN_GOAL.to_string()))
    }

    pub async fn daily_by_goal(&self, goal_id: &GoalId) -> Result<Vec<GoalBucket>, TrackingError> {
        let records = self.records.find_by_goal(goal_id).await?;
        let goal_name = self.goal_name(goal_id).await?;

        Ok(daily_totals(&records)
            .into_iter()
            .map(|(date, total_hours)| GoalBucket {
                goal_id: *goal_id,
                goal_name: goal_name.clone(),
                period: format_day(date),
                total_hours,
            })
            .collect())
    }

    pub async fn weekly_by_goal(&self, goal_id: &GoalId) -> Result<Vec<GoalBucket>, TrackingError> {
        let records = self.records.find_by_goal(goal_id).await?;
        let goal_name = self.goal_name(goal_id).await?;

        Ok(weekly_totals(&records, Self::today(), self.week_start)
            .into_iter()
            .map(|(week, total_hours)| GoalBucket {
                goal_id: *goal_id,
                goal_name: goal_name.clone(),
                period: format_day(week),
                total_hours,
            })
            .collect())
    }

    pub async fn monthly_by_goal(
        &self,
        goal_id: &GoalId,
    ) -> Result<Vec<GoalBucket>, TrackingError> {
        let records = self.records.find_by_goal(goal_id).await?;
        let goal_name = self.goal_name(goal_id).await?;

        Ok(monthly_totals(&records, Self::today())
            .into_iter()
            .map(|(month, total_hours)| GoalBucket {
                goal_id: *goal_id,
                goal_name: goal_name.clone(),
                period: month.to_string(),
                total_hours,
            })
            .collect())
    }

    pub async fn daily_by_user(&self, user_id: &UserId) -> Result<Vec<UserBucket>, TrackingError> {
        let records = self.records.find_by_user(user_id).await?;

        Ok(daily_totals(&records)
            .into_iter()
            .map(|(date, total_hours)| UserBucket {
                period: format_day(date),
                total_hours,
            })
            .collect())
    }

    pub async fn weekly_by_user(&self, user_id: &UserId) -> Result<Vec<UserBucket>, TrackingError> {
        let records = self.records.find_by_user(user_id).await?;

        Ok(weekly_totals(&records, Self::today(), self.week_start)
            .into_iter()
            .map(|(week, total_hours)| UserBucket {
                period: format_day(week),
                total_hours,
            })
            .collect())
    }

    pub async fn monthly_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserBucket>, TrackingError> {
        let records = self.records.find_by_user(user_id).await?;

        Ok(monthly_totals(&records, Self::today())
            .into_iter()
            .map(|(month, total_hours)| UserBucket {
                period: month.to_string(),
                total_hours,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Goal, NewTimeRecord, TimeRecord};
    use crate::domain::services::aggregation::{MONTHS_IN_WINDOW, WEEKS_IN_WINDOW};
    use crate::repositories::mock::{MockGoalRepository, MockRecordRepository};
    use time::macros::date;
    use time::Duration;

    fn goal(id: i32, name: &str) -> Goal {
        Goal {
            id: GoalId::new(id),
            user_id: UserId::new(1),
            name: name.to_string(),
            total_hours: 100.0,
            invested_hours: 0.0,
            progress: 0.0,
        }
    }

    fn record(id: i32, goal_id: i32, day: Date, hours: f64) -> TimeRecord {
        TimeRecord {
            id: crate::domain::models::RecordId::new(id),
            user_id: UserId::new(1),
            goal_id: GoalId::new(goal_id),
            date: day,
            hours,
        }
    }

    fn service(
        records: MockRecordRepository,
        goals: MockGoalRepository,
    ) -> ReportService<MockRecordRepository, MockGoalRepository> {
        ReportService::new(Arc::new(records), Arc::new(goals), Weekday::Sunday)
    }

    #[tokio::test]
    async fn daily_by_goal_resolves_the_goal_name() {
        let records = MockRecordRepository::new().with_records(vec![
            record(1, 1, date!(2024 - 01 - 05), 2.0),
            record(2, 1, date!(2024 - 01 - 05), 3.0),
        ]);
        let goals = MockGoalRepository::new().with_goals(vec![goal(1, "learn rust")]);
        let svc = service(records, goals);

        let buckets = svc.daily_by_goal(&GoalId::new(1)).await.unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].goal_name, "learn rust");
        assert_eq!(buckets[0].period, "2024-01-05");
        assert_eq!(buckets[0].total_hours, 5.0);
    }

    #[tokio::test]
    async fn missing_goal_reports_unknown_goal() {
        let records = MockRecordRepository::new()
            .with_records(vec![record(1, 9, date!(2024 - 01 - 05), 2.0)]);
        let svc = service(records, MockGoalRepository::new());

        let buckets = svc.daily_by_goal(&GoalId::new(9)).await.unwrap();
        assert_eq!(buckets[0].goal_name, "Unknown Goal");
    }

    #[tokio::test]
    async fn weekly_by_user_always_has_eight_ascending_buckets() {
        let now = OffsetDateTime::now_utc().date();
        let records = MockRecordRepository::new().with_records(vec![
            record(1, 1, now, 2.0),
            record(2, 2, now - Duration::weeks(20), 9.0), // outside window
        ]);
        let svc = service(records, MockGoalRepository::new());

        let buckets = svc.weekly_by_user(&UserId::new(1)).await.unwrap();

        assert_eq!(buckets.len(), WEEKS_IN_WINDOW);
        let periods: Vec<&str> = buckets.iter().map(|b| b.period.as_str()).collect();
        let mut sorted = periods.clone();
        sorted.sort();
        assert_eq!(periods, sorted);
        assert_eq!(buckets.last().unwrap().total_hours, 2.0);
        assert_eq!(
            buckets.iter().map(|b| b.total_hours).sum::<f64>(),
            2.0,
            "out-of-window record must be dropped"
        );
    }

    #[tokio::test]
    async fn monthly_by_user_is_empty_without_records() {
        let svc = service(MockRecordRepository::new(), MockGoalRepository::new());
        let buckets = svc.monthly_by_user(&UserId::new(1)).await.unwrap();
        assert!(buckets.is_empty());
    }

    #[tokio::test]
    async fn monthly_by_goal_returns_six_buckets_when_records_exist() {
        let now = OffsetDateTime::now_utc().date();
        let records =
            MockRecordRepository::new().with_records(vec![record(1, 1, now, 4.0)]);
        let goals = MockGoalRepository::new().with_goals(vec![goal(1, "learn rust")]);
        let svc = service(records, goals);

        let buckets = svc.monthly_by_goal(&GoalId::new(1)).await.unwrap();

        assert_eq!(buckets.len(), MONTHS_IN_WINDOW);
        assert_eq!(buckets.last().unwrap().total_hours, 4.0);
        let periods: Vec<&str> = buckets.iter().map(|b| b.period.as_str()).collect();
        let mut sorted = periods.clone();
        sorted.sort();
        assert_eq!(periods, sorted);
    }

    #[tokio::test]
    async fn user_reports_span_all_goals() {
        let records = MockRecordRepository::new().with_records(vec![
            record(1, 1, date!(2024 - 01 - 05), 2.0),
            record(2, 2, date!(2024 - 01 - 05), 3.0),
        ]);
        let svc = service(records, MockGoalRepository::new());

        let buckets = svc.daily_by_user(&UserId::new(1)).await.unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total_hours, 5.0);
    }

    #[tokio::test]
    async fn seeded_insert_sequencing_survives_mixed_use() {
        // Seeded ids and service-created ids must not collide.
        let records = MockRecordRepository::new()
            .with_records(vec![record(5, 1, date!(2024 - 01 - 05), 1.0)]);
        let inserted = records
            .insert(&NewTimeRecord {
                user_id: UserId::new(1),
                goal_id: GoalId::new(1),
                date: date!(2024 - 01 - 06),
                hours: 1.0,
            })
            .await
            .unwrap();
        assert_eq!(inserted.id.as_i32(), 6);
    }
}
