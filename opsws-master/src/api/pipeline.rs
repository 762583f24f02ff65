//! Pipeline API Handlers
//!
//! HTTP endpoints for pipeline management.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use opsws_core::domain::pipeline::Pipeline;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::pipeline_service;

/// GET /api/pipelines
/// List all pipelines
pub async fn list_pipelines(State(repo): State<AppState>) -> ApiResult<Json<Vec<Pipeline>>> {
    tracing::debug!("Listing all pipelines");

    let pipelines = pipeline_service::list_pipelines(&repo).await?;

    Ok(Json(pipelines))
}

/// POST /api/pipelines
/// Create a new pipeline
pub async fn create_pipeline(
    State(repo): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Pipeline>)> {
    let pipeline = parse_pipeline(&headers, &body)?;
    tracing::info!("Creating pipeline: {}", pipeline.id);

    let pipeline = pipeline_service::create_pipeline(&repo, pipeline).await?;

    Ok((StatusCode::CREATED, Json(pipeline)))
}

/// GET /api/pipelines/{id}
/// Get pipeline by ID
pub async fn get_pipeline(
    State(repo): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Pipeline>> {
    tracing::debug!("Getting pipeline: {}", id);

    let pipeline = pipeline_service::get_pipeline(&repo, &id).await?;

    Ok(Json(pipeline))
}

/// PUT /api/pipelines/{id}
/// Replace a pipeline; the path id wins over any id in the body
pub async fn update_pipeline(
    State(repo): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Pipeline>> {
    let pipeline = parse_pipeline(&headers, &body)?;
    tracing::info!("Updating pipeline: {}", id);

    let pipeline = pipeline_service::update_pipeline(&repo, &id, pipeline).await?;

    Ok(Json(pipeline))
}

/// DELETE /api/pipelines/{id}
/// Delete a pipeline
pub async fn delete_pipeline(
    State(repo): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting pipeline: {}", id);

    pipeline_service::delete_pipeline(&repo, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Decode a request body as YAML when the content type says so, JSON otherwise
fn parse_pipeline(headers: &HeaderMap, body: &[u8]) -> ApiResult<Pipeline> {
    let is_yaml = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("yaml"));

    let parsed = if is_yaml {
        serde_yaml::from_slice(body).map_err(|e| e.to_string())
    } else {
        serde_json::from_slice(body).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| ApiError::BadRequest(format!("Invalid request: {}", e)))
}
