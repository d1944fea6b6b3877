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
use crate::services::labels_service::LabelsService;

#[derive(Deserialize)]
pub struct CreateLabelRequest {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateLabelRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

pub async fn create_label(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLabelRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let label = LabelsService::create(&mut conn, &payload)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(label))))
}

pub async fn get_labels(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let labels = LabelsService::list(&mut conn)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(labels))))
}

pub async fn get_label(
    State(state): State<Arc<AppState>>,
    Path(label_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let label = LabelsService::get_by_id(&mut conn, label_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(label))))
}

pub async fn update_label(
    State(state): State<Arc<AppState>>,
    Path(label_id): Path<Uuid>,
    Json(payload): Json<UpdateLabelRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let label = LabelsService::update(&mut conn, label_id, &payload)?;
    Ok((StatusCode::OK, Json(ApiResponse::success(label))))
}

pub async fn delete_label(
    State(state): State<Arc<AppState>>,
    Path(label_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    LabelsService::delete(&mut conn, label_id)?;
    Ok((StatusCode::OK, Json(ApiResponse::ok())))
}
