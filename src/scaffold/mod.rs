//! Lay down the layered Flutter skeleton under an explicit root.
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): the `Scaffold` facade
//! - Internal implementation: filesystem operations in internal/
//!
//! # Example
//!
//! ```no_run
//! use todo_scaffold::scaffold::Scaffold;
//! use todo_scaffold::events::ConsoleSink;
//!
//! let scaffold = Scaffold::new("/home/dev/to_do");
//! let summary = scaffold.run(&mut ConsoleSink)?;
//! println!("{} files written", summary.files);
//! # Ok::<(), todo_scaffold::ScaffoldError>(())
//! ```

mod internal;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::events::{Event, EventSink};
use crate::manifest;

pub use internal::fs_ops::{create_directory, create_file, remove_path};
pub use internal::precondition::validate_root;

/// Counts from one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub removed: usize,
    pub directories: usize,
    pub files: usize,
}

/// Lays the skeleton down under one root directory.
pub struct Scaffold {
    root: PathBuf,
    required_suffix: String,
}

impl Scaffold {
    /// Bind to `root`, requiring the default `to_do` suffix.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            required_suffix: manifest::REQUIRED_SUFFIX.to_string(),
        }
    }

    /// Override the directory-name suffix the root must carry.
    pub fn with_required_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.required_suffix = suffix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn required_suffix(&self) -> &str {
        &self.required_suffix
    }

    /// Check the root's name. Touches nothing on disk.
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.root, &self.required_suffix)
    }

    /// Remove the default generated files. Returns how many paths were removed.
    pub fn cleanup(&self, sink: &mut dyn EventSink) -> Result<usize> {
        let mut removed = 0;
        for path in manifest::LEGACY_PATHS {
            if remove_path(&self.root, path, sink)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn build_directories(&self, sink: &mut dyn EventSink) -> Result<usize> {
        for dir in manifest::DIRECTORIES {
            create_directory(&self.root, dir, sink)?;
        }
        Ok(manifest::DIRECTORIES.len())
    }

    /// Write the entry point from its template, then every placeholder empty.
    pub fn materialize_files(&self, sink: &mut dyn EventSink) -> Result<usize> {
        let mut written = 0;
        for (path, content) in manifest::files() {
            create_file(&self.root, path, content, sink)?;
            written += 1;
        }
        Ok(written)
    }

    /// Validate, clean up, build directories, write files, in that order.
    ///
    /// Stops at the first error; earlier steps are not rolled back.
    pub fn run(&self, sink: &mut dyn EventSink) -> Result<Summary> {
        self.validate()?;
        tracing::debug!(root = %self.root.display(), "root validated");

        let removed = self.cleanup(sink)?;
        let directories = self.build_directories(sink)?;
        let files = self.materialize_files(sink)?;

        sink.emit(Event::Completed { directories, files });

        Ok(Summary {
            removed,
            directories,
            files,
        })
    }
}
