use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::app_state::AppState;
use crate::domain::models::{
    parse_day, GoalId, NewTimeRecord, RecordId, RecordPatch, TimeRecord, UserId,
};
use crate::routes::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_for_day).post(create))
        .route("/:id", get(get_by_id).put(update).delete(remove))
        .route("/user/:user_id", get(list_by_user))
        .route("/goal/:goal_id", get(list_by_goal))
}

#[instrument(name = "create_record", skip(app_state))]
async fn create(
    State(app_state): State<AppState>,
    Json(body): Json<NewTimeRecord>,
) -> Result<(StatusCode, Json<TimeRecord>), ApiError> {
    let record = app_state.records.save(body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[instrument(name = "get_record", skip(app_state))]
async fn get_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TimeRecord>, ApiError> {
    app_state
        .records
        .get(&RecordId::new(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("record {} not found", id)))
}

#[instrument(name = "update_record", skip(app_state, body))]
async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<RecordPatch>,
) -> Result<Json<TimeRecord>, ApiError> {
    app_state
        .records
        .update(&RecordId::new(id), body)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("record {} not found", id)))
}

#[instrument(name = "delete_record", skip(app_state))]
async fn remove(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TimeRecord>, ApiError> {
    app_state
        .records
        .remove(&RecordId::new(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("record {} not found", id)))
}

#[instrument(name = "list_records_by_user", skip(app_state))]
async fn list_by_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<TimeRecord>>, ApiError> {
    let records = app_state.records.list_by_user(&UserId::new(user_id)).await?;
    Ok(Json(records))
}

#[instrument(name = "list_records_by_goal", skip(app_state))]
async fn list_by_goal(
    State(app_state): State<AppState>,
    Path(goal_id): Path<i32>,
) -> Result<Json<Vec<TimeRecord>>, ApiError> {
    let records = app_state.records.list_by_goal(&GoalId::new(goal_id)).await?;
    Ok(Json(records))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayQuery {
    user_id: i32,
    date: String,
}

#[instrument(name = "list_records_for_day", skip(app_state))]
async fn list_for_day(
    State(app_state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<TimeRecord>>, ApiError> {
    let date = parse_day(&query.date)
        .map_err(|_| ApiError::bad_request(format!("invalid date: {}", query.date)))?;
    let records = app_state
        .records
        .list_for_day(&UserId::new(query.user_id), &date)
        .await?;
    Ok(Json(records))
}
