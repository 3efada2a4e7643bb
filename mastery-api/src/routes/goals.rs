use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::app_state::AppState;
use crate::domain::models::{Goal, GoalId, NewGoal, UserId};
use crate::repositories::GoalRepository;
use crate::routes::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(create))
        .route("/:id", get(get_by_id))
        .route("/user/:user_id", get(list_by_user))
}

#[instrument(name = "create_goal", skip(app_state))]
async fn create(
    State(app_state): State<AppState>,
    Json(body): Json<NewGoal>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    let goal = app_state.goals.insert(&body).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

#[instrument(name = "get_goal", skip(app_state))]
async fn get_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Goal>, ApiError> {
    app_state
        .goals
        .find_by_id(&GoalId::new(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("goal {} not found", id)))
}

#[instrument(name = "list_goals_by_user", skip(app_state))]
async fn list_by_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = app_state.goals.find_by_user(&UserId::new(user_id)).await?;
    Ok(Json(goals))
}
