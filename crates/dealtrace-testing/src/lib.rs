//! Testing infrastructure for dealtrace integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `builders`: Fluent construction of negotiations and runs
//! - `fixtures`: Archive file placement in isolated directories
//! - `service`: A scripted evaluation backend for coordinator tests

pub mod builders;
pub mod fixtures;
pub mod service;

pub use builders::{NegotiationBuilder, RunBuilder};
pub use fixtures::ArchiveDir;
pub use service::ScriptedEvaluationService;
