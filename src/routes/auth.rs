use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::user::{LoginRequest, SignupRequest};
use crate::error::AppResult;
use crate::services::users_service::UsersService;
use crate::validation::ValidatedJson;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::signup(&mut conn, &payload, state.config.bcrypt_cost)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::login(&mut conn, &payload)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(user))))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::get_by_id(&mut conn, user_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(user))))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let users = UsersService::list(&mut conn)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(users))))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    UsersService::delete(&mut conn, user_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}
