use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    state::AppState,
    users::{
        dto::{ErrorResponse, User},
        validate::validate_new_user_request,
    },
};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_all_users).post(create_user).put(update_user))
        .route("/users/:user_id", get(get_user_by_id).delete(delete_user))
}

fn failure(status: StatusCode, err: impl std::fmt::Display) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

#[instrument(skip(state))]
pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.get_all().await.map_err(|e| {
        warn!(error = %e, "list users failed");
        failure(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;
    Ok(Json(users))
}

/// Invalid ids and unknown users both answer 500.
#[instrument(skip(state))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get_by_id(&user_id).await.map_err(|e| {
        warn!(error = %e, %user_id, "get user failed");
        failure(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(mut req) = payload.map_err(|e| failure(StatusCode::BAD_REQUEST, e.body_text()))?;

    if let Err(e) = validate_new_user_request(&mut req) {
        warn!(error = %e, "invalid create request");
        return Err(failure(StatusCode::INTERNAL_SERVER_ERROR, e));
    }

    let user = state.users.create(req).await.map_err(|e| {
        warn!(error = %e, "create user failed");
        failure(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    info!(user_id = user.id, user_name = %user.user_name, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(req) = payload.map_err(|e| failure(StatusCode::BAD_REQUEST, e.body_text()))?;

    let user = state.users.update(req).await.map_err(|e| {
        warn!(error = %e, "update user failed");
        failure(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

/// Every failure, storage included, answers 400.
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.users.delete_by_id(&user_id).await.map_err(|e| {
        warn!(error = %e, %user_id, "delete user failed");
        failure(StatusCode::BAD_REQUEST, e)
    })?;

    info!(%user_id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
