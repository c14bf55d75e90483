use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Resolve the dealtrace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DEALTRACE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.dealtrace (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DEALTRACE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("dealtrace"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".dealtrace"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

const DEFAULT_FAST_POLL_MS: u64 = 5_000;
const DEFAULT_EARLY_RECHECK_MS: u64 = 1_500;

/// Polling cadence of the backfill coordinator.
///
/// While a backfill runs, status is re-fetched every `fast_poll_ms`. One
/// extra re-check fires `early_recheck_ms` after a trigger so the pending
/// count moves before the first full interval elapses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_fast_poll_ms")]
    pub fast_poll_ms: u64,
    #[serde(default = "default_early_recheck_ms")]
    pub early_recheck_ms: u64,
}

fn default_fast_poll_ms() -> u64 {
    DEFAULT_FAST_POLL_MS
}

fn default_early_recheck_ms() -> u64 {
    DEFAULT_EARLY_RECHECK_MS
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            fast_poll_ms: DEFAULT_FAST_POLL_MS,
            early_recheck_ms: DEFAULT_EARLY_RECHECK_MS,
        }
    }
}

impl PollConfig {
    pub fn fast_poll(&self) -> Duration {
        Duration::from_millis(self.fast_poll_ms)
    }

    pub fn early_recheck(&self) -> Duration {
        Duration::from_millis(self.early_recheck_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeConfig {
    /// Directory holding negotiation archive files. Resolved against the
    /// workspace path when unset.
    #[serde(default)]
    pub snapshot_root: Option<PathBuf>,
    #[serde(default)]
    pub poll: PollConfig,
}

impl RuntimeConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: RuntimeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join("config.toml"))
    }

    /// The archive directory to open: the configured root, or `archives/`
    /// under the workspace path.
    pub fn resolve_snapshot_root(&self) -> Result<PathBuf> {
        match &self.snapshot_root {
            Some(root) => Ok(root.clone()),
            None => Ok(resolve_workspace_path(None)?.join("archives")),
        }
    }
}
