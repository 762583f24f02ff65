//! Pipeline Repository
//!
//! Handles all database operations related to pipelines.
//!
//! A pipeline is one row. `name` is a plain column; `agent`, `labels` and
//! `stages` are each encoded with the repository's [`Codec`] and stored as
//! opaque text.

use opsws_core::domain::pipeline::{Agent, Pipeline, Stage};
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::repository::codec::{BlobFormat, Codec, CodecError};

/// Repository error type
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("failed to encode {column} of pipeline {id}: {source}")]
    Encode {
        id: String,
        column: &'static str,
        #[source]
        source: CodecError,
    },

    #[error("failed to decode {column} of pipeline {id}: {source}")]
    Decode {
        id: String,
        column: &'static str,
        #[source]
        source: CodecError,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Pipeline storage over a shared connection pool
///
/// Cloning is cheap; every clone uses the same pool.
#[derive(Debug, Clone)]
pub struct PipelineRepository<C = BlobFormat> {
    pool: SqlitePool,
    codec: C,
}

impl<C: Codec> PipelineRepository<C> {
    pub fn new(pool: SqlitePool, codec: C) -> Self {
        Self { pool, codec }
    }

    /// Insert a new pipeline
    ///
    /// Returns `false` when a pipeline with the same id already exists.
    pub async fn create(&self, pipeline: &Pipeline) -> Result<bool> {
        let columns = self.encode_columns(&pipeline.id, pipeline)?;

        let result = sqlx::query(
            r#"
            INSERT INTO pipelines (id, name, agent, labels, stages)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&pipeline.id)
        .bind(&pipeline.name)
        .bind(columns.agent)
        .bind(columns.labels)
        .bind(columns.stages)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Find a pipeline by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Pipeline>> {
        let row = sqlx::query_as::<_, PipelineRow>(
            r#"
            SELECT id, name, agent, labels, stages
            FROM pipelines
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.decode(&self.codec)).transpose()
    }

    /// List all pipelines in the store's scan order
    pub async fn list_all(&self) -> Result<Vec<Pipeline>> {
        let rows = sqlx::query_as::<_, PipelineRow>(
            r#"
            SELECT id, name, agent, labels, stages
            FROM pipelines
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.decode(&self.codec)).collect()
    }

    /// Overwrite every column of the pipeline stored under `id`
    ///
    /// `pipeline.id` is ignored. Returns `false` when no row matched.
    pub async fn update(&self, id: &str, pipeline: &Pipeline) -> Result<bool> {
        let columns = self.encode_columns(id, pipeline)?;

        let result = sqlx::query(
            r#"
            UPDATE pipelines
            SET name = ?1, agent = ?2, labels = ?3, stages = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&pipeline.name)
        .bind(columns.agent)
        .bind(columns.labels)
        .bind(columns.stages)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a pipeline by ID
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pipelines WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn encode_columns(&self, id: &str, pipeline: &Pipeline) -> Result<EncodedColumns> {
        let encode_err = |column: &'static str| {
            move |source: CodecError| RepositoryError::Encode {
                id: id.to_string(),
                column,
                source,
            }
        };

        Ok(EncodedColumns {
            agent: self
                .codec
                .encode(&pipeline.agent)
                .map_err(encode_err("agent"))?,
            labels: self
                .codec
                .encode(&pipeline.labels)
                .map_err(encode_err("labels"))?,
            stages: self
                .codec
                .encode(&pipeline.stages)
                .map_err(encode_err("stages"))?,
        })
    }
}

struct EncodedColumns {
    agent: String,
    labels: String,
    stages: String,
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct PipelineRow {
    id: String,
    name: Option<String>,
    agent: Option<String>,
    labels: Option<String>,
    stages: Option<String>,
}

impl PipelineRow {
    fn decode<C: Codec>(self, codec: &C) -> Result<Pipeline> {
        let agent: Option<Agent> = decode_column(codec, &self.id, "agent", self.agent)?;
        let labels: Vec<String> = decode_column(codec, &self.id, "labels", self.labels)?;
        let stages: Vec<Stage> = decode_column(codec, &self.id, "stages", self.stages)?;

        Ok(Pipeline {
            id: self.id,
            name: self.name.unwrap_or_default(),
            agent,
            stages,
            labels,
        })
    }
}

/// SQL `NULL` and an encoded `null` both read back as the empty value.
/// Anything else must decode cleanly.
fn decode_column<C, T>(codec: &C, id: &str, column: &'static str, text: Option<String>) -> Result<T>
where
    C: Codec,
    T: DeserializeOwned + Default,
{
    let Some(text) = text else {
        return Ok(T::default());
    };

    codec
        .decode::<Option<T>>(&text)
        .map(Option::unwrap_or_default)
        .map_err(|source| RepositoryError::Decode {
            id: id.to_string(),
            column,
            source,
        })
}
