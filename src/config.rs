use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::manifest;

/// Command run by `--verify` when no command is given.
pub const DEFAULT_VERIFY_COMMAND: &str = "flutter analyze";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Progress lines, banner and next steps
    #[default]
    Human,
    /// One JSON object per event, nothing else on stdout
    Json,
}

/// Resolved settings for one scaffolding run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the skeleton is laid down in
    pub root: PathBuf,
    /// Suffix the root's name must end with
    pub required_suffix: String,
    pub output: OutputMode,
    /// Command run in the root after scaffolding, if any
    pub verify: Option<String>,
}

impl Config {
    /// Load configuration for the current directory
    pub fn load() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::for_root(root))
    }

    /// Default settings for an explicit root
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            required_suffix: manifest::REQUIRED_SUFFIX.to_string(),
            output: OutputMode::Human,
            verify: None,
        }
    }

    /// Load with an explicit root, resolved against the current directory
    pub fn load_with_root(root: Option<&Path>) -> Result<Self> {
        match root {
            None => Self::load(),
            Some(root) => Ok(Self::for_root(resolve_root(root)?)),
        }
    }
}

/// Make `root` absolute so its final segment is a real directory name.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    if root.exists() {
        return root
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", root.display()));
    }
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(root))
}
