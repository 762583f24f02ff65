//! Service Module
//!
//! Business logic layer for the master.
//! Services sit between the HTTP handlers and the repositories.

pub mod pipeline;

// Re-export for convenience
pub use pipeline as pipeline_service;
