//! Filesystem builder, file materializer and legacy cleanup.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::events::{EntryKind, Event, EventSink};

/// Create `relative` (and missing ancestors) under `root`. No-op if present.
pub fn create_directory(root: &Path, relative: &str, sink: &mut dyn EventSink) -> Result<()> {
    let path = root.join(relative);
    tracing::debug!(path = %path.display(), "creating directory");

    fs::create_dir_all(&path).map_err(|e| ScaffoldError::io("create directory", &path, e))?;

    sink.emit(Event::DirectoryCreated {
        path: relative.into(),
    });
    Ok(())
}

/// Write `content` to `relative` under `root`, replacing whatever was there.
pub fn create_file(
    root: &Path,
    relative: &str,
    content: &str,
    sink: &mut dyn EventSink,
) -> Result<()> {
    let path = root.join(relative);
    tracing::debug!(path = %path.display(), bytes = content.len(), "writing file");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ScaffoldError::io("create parent directory for", &path, e))?;
    }

    // Handle is dropped (closed) on every exit from this block.
    {
        let mut file = File::create(&path).map_err(|e| ScaffoldError::io("open", &path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| ScaffoldError::io("write", &path, e))?;
    }

    sink.emit(Event::FileWritten {
        path: relative.into(),
        bytes: content.len(),
    });
    Ok(())
}

/// Remove `relative` under `root` if it exists. Returns whether anything was removed.
pub fn remove_path(root: &Path, relative: &str, sink: &mut dyn EventSink) -> Result<bool> {
    let path = root.join(relative);

    let kind = if path.is_dir() {
        fs::remove_dir_all(&path).map_err(|e| ScaffoldError::io("remove directory", &path, e))?;
        EntryKind::Directory
    } else if path.exists() {
        fs::remove_file(&path).map_err(|e| ScaffoldError::io("remove file", &path, e))?;
        EntryKind::File
    } else {
        tracing::debug!(path = %path.display(), "nothing to remove");
        return Ok(false);
    };

    tracing::debug!(path = %path.display(), %kind, "removed");
    sink.emit(Event::PathRemoved {
        path: relative.into(),
        kind,
    });
    Ok(true)
}
