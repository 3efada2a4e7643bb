use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_error::RepositoryError;
use crate::domain::models::{Goal, GoalId, NewGoal, UserId};

#[async_trait]
pub trait GoalRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, RepositoryError>;
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Goal>, RepositoryError>;
    async fn insert(&self, goal: &NewGoal) -> Result<Goal, RepositoryError>;
    /// Persist new invested hours and progress for an existing goal.
    async fn save(&self, goal: &Goal) -> Result<(), RepositoryError>;
}

pub struct GoalRepositoryImpl {
    pool: PgPool,
}

impl GoalRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GoalRow {
    id: i32,
    user_id: i32,
    name: String,
    total_hours: f64,
    invested_hours: f64,
    progress: f64,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Self {
            id: GoalId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            total_hours: row.total_hours,
            invested_hours: row.invested_hours,
            progress: row.progress,
        }
    }
}

#[async_trait]
impl GoalRepository for GoalRepositoryImpl {
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, RepositoryError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, user_id, name, total_hours, invested_hours, progress
            FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Goal>, RepositoryError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, user_id, name, total_hours, invested_hours, progress
            FROM goals
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, RepositoryError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            INSERT INTO goals (user_id, name, total_hours, invested_hours, progress)
            VALUES ($1, $2, $3, 0, 0)
            RETURNING id, user_id, name, total_hours, invested_hours, progress
            "#,
        )
        .bind(goal.user_id.as_i32())
        .bind(&goal.name)
        .bind(goal.total_hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn save(&self, goal: &Goal) -> Result<(), RepositoryError> {
        let query_result = sqlx::query(
            r#"
            UPDATE goals
            SET invested_hours = $2, progress = $3
            WHERE id = $1
            "#,
        )
        .bind(goal.id.as_i32())
        .bind(goal.invested_hours)
        .bind(goal.progress)
        .execute(&self.pool)
        .await?;

        if query_result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(goal.id.to_string()));
        }

        Ok(())
    }
}
