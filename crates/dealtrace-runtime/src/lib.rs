//! Runtime layer for dealtrace: configuration resolution and the
//! evaluation backfill coordinator.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod service;

pub use config::{PollConfig, RuntimeConfig, resolve_workspace_path};
pub use coordinator::{
    BackfillCoordinator, BackfillEvent, BackfillPhase, CoordinatorHandle, CoordinatorState,
};
pub use error::{Error, Result};
pub use service::EvaluationService;
