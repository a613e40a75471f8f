use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("expected a directory ending in '{expected}', got {}", actual.display())]
    WrongDirectory { expected: String, actual: PathBuf },

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for the precondition failure that should end the process with code 1.
    pub fn is_wrong_directory(&self) -> bool {
        matches!(self, Self::WrongDirectory { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
