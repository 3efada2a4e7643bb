use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::app_state::AppState;
use crate::auth::password;
use crate::domain::models::{NewUser, User};
use crate::repositories::UserRepository;
use crate::routes::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[derive(Debug, Deserialize)]
struct CredentialsPayload {
    email: String,
    password: String,
}

#[instrument(name = "register", skip(app_state, body))]
async fn register(
    State(app_state): State<AppState>,
    Json(body): Json<CredentialsPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if app_state.users.find_by_email(&body.email).await?.is_some() {
        return Err(ApiError::conflict(format!(
            "user {} already exists",
            body.email
        )));
    }

    let password_hash = password::hash(&body.password)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {}", e)))?;
    let user = app_state
        .users
        .insert(&NewUser {
            email: body.email,
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(name = "login", skip(app_state, body))]
async fn login(
    State(app_state): State<AppState>,
    Json(body): Json<CredentialsPayload>,
) -> Result<Json<User>, ApiError> {
    let user = app_state
        .users
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid credentials"))?;

    if !password::verify(&body.password, &user.password_hash) {
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    Ok(Json(user))
}
