use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::error::AppResult;
use crate::middleware::identity::ActingUser;
use crate::services::comments_service::CommentsService;

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub body: String,
}

pub async fn get_comments(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let tree = CommentsService::get_tree(&mut conn, issue_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(tree))))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
    acting_user: ActingUser,
    Json(payload): Json<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let comment = CommentsService::create(
        &mut conn,
        &acting_user.context(),
        issue_id,
        payload.body,
        payload.parent_id,
    )?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(comment))))
}

pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    Path((issue_id, comment_id)): Path<(Uuid, Uuid)>,
    acting_user: ActingUser,
    Json(payload): Json<UpdateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let comment = CommentsService::update(
        &mut conn,
        &acting_user.context(),
        issue_id,
        comment_id,
        payload.body,
    )?;
    Ok((StatusCode::OK, Json(ApiResponse::success(comment))))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path((issue_id, comment_id)): Path<(Uuid, Uuid)>,
    acting_user: ActingUser,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    CommentsService::delete(&mut conn, &acting_user.context(), issue_id, comment_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}

pub async fn count_comments(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let count = CommentsService::count(&mut conn, issue_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(count))))
}
