//! OpsWS Core
//!
//! Shared document model for the OpsWS pipeline registry.
//!
//! This crate contains:
//! - Domain types: Pipeline, Agent, Stage, Step
//!
//! Note: Persistence and HTTP live in the master service.

pub mod domain;
