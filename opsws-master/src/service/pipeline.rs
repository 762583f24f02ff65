//! Pipeline Service
//!
//! Business logic for pipeline management.

use opsws_core::domain::pipeline::Pipeline;
use thiserror::Error;

use crate::repository::codec::Codec;
use crate::repository::pipeline_repository::{PipelineRepository, RepositoryError};

/// Service error type
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Pipeline {0} not found")]
    NotFound(String),

    #[error("Pipeline {0} already exists")]
    Conflict(String),

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Create a new pipeline
pub async fn create_pipeline<C: Codec>(
    repo: &PipelineRepository<C>,
    pipeline: Pipeline,
) -> Result<Pipeline> {
    validate_new_pipeline(&pipeline)?;

    if !repo.create(&pipeline).await? {
        return Err(PipelineError::Conflict(pipeline.id));
    }

    tracing::info!("Pipeline created: {} ({})", pipeline.name, pipeline.id);

    Ok(pipeline)
}

/// Get a pipeline by ID
pub async fn get_pipeline<C: Codec>(repo: &PipelineRepository<C>, id: &str) -> Result<Pipeline> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| PipelineError::NotFound(id.to_string()))
}

/// List all pipelines
pub async fn list_pipelines<C: Codec>(repo: &PipelineRepository<C>) -> Result<Vec<Pipeline>> {
    let pipelines = repo.list_all().await?;
    Ok(pipelines)
}

/// Replace the pipeline stored under `id`
///
/// Returns the submitted document unchanged.
pub async fn update_pipeline<C: Codec>(
    repo: &PipelineRepository<C>,
    id: &str,
    pipeline: Pipeline,
) -> Result<Pipeline> {
    if !repo.update(id, &pipeline).await? {
        return Err(PipelineError::NotFound(id.to_string()));
    }

    tracing::info!("Pipeline updated: {}", id);

    Ok(pipeline)
}

/// Delete a pipeline
pub async fn delete_pipeline<C: Codec>(repo: &PipelineRepository<C>, id: &str) -> Result<()> {
    if !repo.delete(id).await? {
        return Err(PipelineError::NotFound(id.to_string()));
    }

    tracing::info!("Pipeline deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_new_pipeline(pipeline: &Pipeline) -> Result<()> {
    if pipeline.id.trim().is_empty() {
        return Err(PipelineError::ValidationError(
            "Pipeline id cannot be empty".to_string(),
        ));
    }

    Ok(())
}
