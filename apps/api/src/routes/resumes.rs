use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

fn not_found() -> AppError {
    AppError::NotFound("Resume not found".to_string())
}

/// GET /api/resumes
pub async fn list_resumes(State(state): State<AppState>) -> Result<Json<Vec<Resume>>, AppError> {
    let resumes = state.store.list().await?;
    Ok(Json(resumes))
}

/// POST /api/resumes
pub async fn create_resume(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let created = state.store.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/resumes/:id
pub async fn get_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Resume>, AppError> {
    let resume = state.store.get(id).await?.ok_or_else(not_found)?;
    Ok(Json(resume))
}

/// PUT /api/resumes/:id
pub async fn update_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Resume>, AppError> {
    let merged = state.store.update(id, patch).await?.ok_or_else(not_found)?;
    Ok(Json(merged))
}

/// DELETE /api/resumes/:id
pub async fn delete_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
