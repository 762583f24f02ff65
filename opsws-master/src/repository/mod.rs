//! Repository Module
//!
//! Data access layer for the master.

pub mod codec;
pub mod pipeline;

// Re-export for convenience
pub use pipeline as pipeline_repository;
