//! Discovery and loading of negotiation archive files.

use std::fs;
use std::path::{Path, PathBuf};

use dealtrace_types::{NegotiationRecord, SimulationRun};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::mapper;
use crate::schema::RawArchive;

/// One archive file, fully mapped into the domain model.
#[derive(Debug, Clone)]
pub struct NegotiationArchive {
    pub record: NegotiationRecord,
    pub runs: Vec<SimulationRun>,
}

/// Parse a single archive file.
pub fn read_archive(path: &Path) -> Result<NegotiationArchive> {
    let contents = fs::read_to_string(path)?;
    let raw: RawArchive = serde_json::from_str(&contents)?;
    let (record, runs) = mapper::map_archive(raw)?;
    Ok(NegotiationArchive { record, runs })
}

/// List the archive files under `root`.
///
/// Archives are `.json` files at the root or one directory below it (some
/// exporters group them by month). Paths come back sorted by file name so
/// loads are reproducible.
pub fn discover_archives(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("snapshot root not found: {}", root.display()),
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).max_depth(2).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
