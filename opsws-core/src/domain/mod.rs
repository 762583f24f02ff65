//! Core domain types
//!
//! Pipeline definitions are plain trees of owned values. The master service
//! stores them and hands them back; nothing here executes anything.

pub mod pipeline;
