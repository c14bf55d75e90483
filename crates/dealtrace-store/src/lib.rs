//! Archive ingestion for dealtrace.
//!
//! Negotiation simulations are exported by the upstream tool as JSON archive
//! files, one per negotiation. This crate discovers and parses those files
//! tolerantly, maps them into the canonical domain model from
//! `dealtrace-types`, and serves them through the [`RunStore`] trait that the
//! rest of the workspace consumes.

mod archive;
mod error;
mod mapper;
mod schema;
mod store;

pub use archive::{NegotiationArchive, discover_archives, read_archive};
pub use error::{Error, Result};
pub use store::{ArchiveIssue, RunStore, SnapshotStore};
