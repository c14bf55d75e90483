//! The [`RunStore`] access trait and the snapshot-backed implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dealtrace_types::{NegotiationId, NegotiationRecord, RunId, SimulationRun};

use crate::archive::{self, NegotiationArchive};
use crate::error::Result;

/// Read access to negotiations and their simulation runs.
///
/// The analytics engine only ever reads; writes happen in the upstream
/// simulation tool. Implementors must hand out data in a stable order so
/// downstream grouping and labeling stay reproducible across calls.
pub trait RunStore: Send + Sync {
    /// Every negotiation, in load order.
    fn negotiations(&self) -> Result<Vec<NegotiationRecord>>;

    /// One negotiation by id.
    fn negotiation(&self, id: &NegotiationId) -> Result<Option<NegotiationRecord>>;

    /// The runs recorded for one negotiation, ordered by run number.
    fn runs(&self, id: &NegotiationId) -> Result<Vec<SimulationRun>>;

    /// Runs selected by id, in the order requested. Unknown ids are skipped;
    /// callers that need all of them compare lengths.
    fn runs_by_ids(&self, ids: &[RunId]) -> Result<Vec<SimulationRun>>;
}

/// A problem encountered while loading one archive file.
#[derive(Debug)]
pub struct ArchiveIssue {
    pub path: PathBuf,
    pub reason: String,
}

/// In-memory store over a directory of negotiation archive files.
///
/// Archives that fail to parse are skipped and reported through
/// [`SnapshotStore::issues`]; one corrupt export must not take the whole
/// dashboard down.
pub struct SnapshotStore {
    negotiations: Vec<NegotiationRecord>,
    runs: HashMap<NegotiationId, Vec<SimulationRun>>,
    run_lookup: HashMap<RunId, (NegotiationId, usize)>,
    issues: Vec<ArchiveIssue>,
}

impl SnapshotStore {
    /// Load every archive under `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let mut archives = Vec::new();
        let mut issues = Vec::new();
        for path in archive::discover_archives(root)? {
            match archive::read_archive(&path) {
                Ok(loaded) => archives.push(loaded),
                Err(err) => issues.push(ArchiveIssue {
                    path,
                    reason: err.to_string(),
                }),
            }
        }
        let mut store = Self::from_archives(archives);
        store.issues.extend(issues);
        Ok(store)
    }

    /// Build a store from already-loaded archives.
    ///
    /// When two archives describe the same negotiation the first one wins and
    /// the duplicate is recorded as an issue.
    pub fn from_archives(archives: Vec<NegotiationArchive>) -> Self {
        let mut store = Self {
            negotiations: Vec::new(),
            runs: HashMap::new(),
            run_lookup: HashMap::new(),
            issues: Vec::new(),
        };

        for archive in archives {
            let id = archive.record.id.clone();
            if store.runs.contains_key(&id) {
                store.issues.push(ArchiveIssue {
                    path: PathBuf::new(),
                    reason: format!("duplicate negotiation {id}"),
                });
                continue;
            }

            let mut runs = archive.runs;
            runs.sort_by(|a, b| {
                let a_number = a.run_number.unwrap_or(u32::MAX);
                let b_number = b.run_number.unwrap_or(u32::MAX);
                a_number.cmp(&b_number).then_with(|| a.id.cmp(&b.id))
            });
            for (index, run) in runs.iter().enumerate() {
                store
                    .run_lookup
                    .entry(run.id.clone())
                    .or_insert_with(|| (id.clone(), index));
            }

            store.negotiations.push(archive.record);
            store.runs.insert(id, runs);
        }

        store
    }

    /// Archive files that could not be loaded.
    pub fn issues(&self) -> &[ArchiveIssue] {
        &self.issues
    }
}

impl RunStore for SnapshotStore {
    fn negotiations(&self) -> Result<Vec<NegotiationRecord>> {
        Ok(self.negotiations.clone())
    }

    fn negotiation(&self, id: &NegotiationId) -> Result<Option<NegotiationRecord>> {
        Ok(self
            .negotiations
            .iter()
            .find(|record| &record.id == id)
            .cloned())
    }

    fn runs(&self, id: &NegotiationId) -> Result<Vec<SimulationRun>> {
        Ok(self.runs.get(id).cloned().unwrap_or_default())
    }

    fn runs_by_ids(&self, ids: &[RunId]) -> Result<Vec<SimulationRun>> {
        let mut selected = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some((negotiation, index)) = self.run_lookup.get(id) {
                if let Some(run) = self.runs.get(negotiation).and_then(|runs| runs.get(*index)) {
                    selected.push(run.clone());
                }
            }
        }
        Ok(selected)
    }
}
