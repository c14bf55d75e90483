//! Fixture placement for archive-backed tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// An isolated archive directory that cleans itself up.
///
/// # Example
/// ```no_run
/// use dealtrace_testing::ArchiveDir;
///
/// let archives = ArchiveDir::new();
/// archives.write_archive(
///     "neg-1.json",
///     r#"{"negotiation": {"id": "neg-1", "title": "Sample"}}"#,
/// );
/// // open a SnapshotStore over archives.root()
/// ```
pub struct ArchiveDir {
    temp: TempDir,
}

impl Default for ArchiveDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveDir {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create archive dir"),
        }
    }

    /// The directory a store should be opened on.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Place one raw archive file and return its path.
    pub fn write_archive(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create archive subdir");
        }
        fs::write(&path, contents).expect("failed to write archive fixture");
        path
    }
}
