use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;

use super::repo_error::RepositoryError;
use crate::domain::models::{GoalId, NewTimeRecord, RecordId, RecordPatch, TimeRecord, UserId};

#[async_trait]
pub trait RecordRepository: Send + Sync + 'static {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, RepositoryError>;
    async fn find_by_goal(&self, goal_id: &GoalId) -> Result<Vec<TimeRecord>, RepositoryError>;
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<TimeRecord>, RepositoryError>;
    /// All of a user's records within one calendar day.
    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: &Date,
    ) -> Result<Vec<TimeRecord>, RepositoryError>;
    async fn insert(&self, record: &NewTimeRecord) -> Result<TimeRecord, RepositoryError>;
    async fn update(
        &self,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> Result<Option<TimeRecord>, RepositoryError>;
    async fn delete(&self, id: &RecordId) -> Result<Option<TimeRecord>, RepositoryError>;
}

pub struct RecordRepositoryImpl {
    pool: PgPool,
}

impl RecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i32,
    user_id: i32,
    goal_id: i32,
    record_date: Date,
    hours: f64,
}

impl From<RecordRow> for TimeRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            id: RecordId::new(row.id),
            user_id: UserId::new(row.user_id),
            goal_id: GoalId::new(row.goal_id),
            date: row.record_date,
            hours: row.hours,
        }
    }
}

#[async_trait]
impl RecordRepository for RecordRepositoryImpl {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, user_id, goal_id, record_date, hours
            FROM records
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_goal(&self, goal_id: &GoalId) -> Result<Vec<TimeRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, user_id, goal_id, record_date, hours
            FROM records
            WHERE goal_id = $1
            ORDER BY id
            "#,
        )
        .bind(goal_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<TimeRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, user_id, goal_id, record_date, hours
            FROM records
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: &Date,
    ) -> Result<Vec<TimeRecord>, RepositoryError> {
        // record_date is a DATE column, so a whole calendar day is an
        // equality match.
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, user_id, goal_id, record_date, hours
            FROM records
            WHERE user_id = $1 AND record_date = $2
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, record: &NewTimeRecord) -> Result<TimeRecord, RepositoryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            INSERT INTO records (user_id, goal_id, record_date, hours)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, goal_id, record_date, hours
            "#,
        )
        .bind(record.user_id.as_i32())
        .bind(record.goal_id.as_i32())
        .bind(record.date)
        .bind(record.hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> Result<Option<TimeRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            UPDATE records
            SET goal_id = COALESCE($2, goal_id),
                record_date = COALESCE($3, record_date),
                hours = COALESCE($4, hours)
            WHERE id = $1
            RETURNING id, user_id, goal_id, record_date, hours
            "#,
        )
        .bind(id.as_i32())
        .bind(patch.goal_id.map(|g| g.as_i32()))
        .bind(patch.date)
        .bind(patch.hours)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &RecordId) -> Result<Option<TimeRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            DELETE FROM records
            WHERE id = $1
            RETURNING id, user_id, goal_id, record_date, hours
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
