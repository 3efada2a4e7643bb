use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::app_state::AppState;
use crate::domain::models::{GoalBucket, GoalId, UserBucket, UserId};
use crate::routes::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/goals/:goal_id/daily", get(daily_by_goal))
        .route("/goals/:goal_id/weekly", get(weekly_by_goal))
        .route("/goals/:goal_id/monthly", get(monthly_by_goal))
        .route("/users/:user_id/daily", get(daily_by_user))
        .route("/users/:user_id/weekly", get(weekly_by_user))
        .route("/users/:user_id/monthly", get(monthly_by_user))
}

#[instrument(name = "daily_by_goal", skip(app_state))]
async fn daily_by_goal(
    State(app_state): State<AppState>,
    Path(goal_id): Path<i32>,
) -> Result<Json<Vec<GoalBucket>>, ApiError> {
    let buckets = app_state.reports.daily_by_goal(&GoalId::new(goal_id)).await?;
    Ok(Json(buckets))
}

#[instrument(name = "weekly_by_goal", skip(app_state))]
async fn weekly_by_goal(
    State(app_state): State<AppState>,
    Path(goal_id): Path<i32>,
) -> Result<Json<Vec<GoalBucket>>, ApiError> {
    let buckets = app_state
        .reports
        .weekly_by_goal(&GoalId::new(goal_id))
        .await?;
    Ok(Json(buckets))
}

#[instrument(name = "monthly_by_goal", skip(app_state))]
async fn monthly_by_goal(
    State(app_state): State<AppState>,
    Path(goal_id): Path<i32>,
) -> Result<Json<Vec<GoalBucket>>, ApiError> {
    let buckets = app_state
        .reports
        .monthly_by_goal(&GoalId::new(goal_id))
        .await?;
    Ok(Json(buckets))
}

#[instrument(name = "daily_by_user", skip(app_state))]
async fn daily_by_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<UserBucket>>, ApiError> {
    let buckets = app_state.reports.daily_by_user(&UserId::new(user_id)).await?;
    Ok(Json(buckets))
}

#[instrument(name = "weekly_by_user", skip(app_state))]
async fn weekly_by_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<UserBucket>>, ApiError> {
    let buckets = app_state
        .reports
        .weekly_by_user(&UserId::new(user_id))
        .await?;
    Ok(Json(buckets))
}

#[instrument(name = "monthly_by_user", skip(app_state))]
async fn monthly_by_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<UserBucket>>, ApiError> {
    let buckets = app_state
        .reports
        .monthly_by_user(&UserId::new(user_id))
        .await?;
    Ok(Json(buckets))
}
