use axum::{
    Json,
    extract::{Path, Query, State},
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
use crate::services::issue_labels_service::IssueLabelsService;
use crate::services::issues_service::IssuesService;

#[derive(Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct UpdateIssueRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct ChangeStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct IssueQueryParams {
    pub status: Option<String>,
    pub author_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    /// Comma-separated label ids.
    pub label_ids: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Deserialize)]
pub struct AttachLabelsRequest {
    pub label_ids: Vec<Uuid>,
}

pub async fn create_issue(
    State(state): State<Arc<AppState>>,
    acting_user: ActingUser,
    Json(payload): Json<CreateIssueRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let issue = IssuesService::create(&mut conn, &acting_user.context(), &payload)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(issue))))
}

pub async fn get_issues(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IssueQueryParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let page = IssuesService::list(&mut conn, &params)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(page))))
}

pub async fn get_issue(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let issue = IssuesService::get_by_id(&mut conn, issue_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(issue))))
}

pub async fn update_issue(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
    Json(payload): Json<UpdateIssueRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let issue = IssuesService::update(&mut conn, issue_id, &payload)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(issue))))
}

pub async fn change_issue_status(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
    Json(payload): Json<ChangeStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let issue = IssuesService::change_status(&mut conn, issue_id, &payload.status)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(issue))))
}

pub async fn delete_issue(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    IssuesService::delete(&mut conn, issue_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}

pub async fn attach_labels(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
    Json(payload): Json<AttachLabelsRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let labels = IssueLabelsService::attach(&mut conn, issue_id, &payload.label_ids)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(labels))))
}

pub async fn get_issue_labels(
    State(state): State<Arc<AppState>>,
    Path(issue_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let labels = IssueLabelsService::list(&mut conn, issue_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(labels))))
}

pub async fn detach_label(
    State(state): State<Arc<AppState>>,
    Path((issue_id, label_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let label = IssueLabelsService::detach(&mut conn, issue_id, label_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(label))))
}
