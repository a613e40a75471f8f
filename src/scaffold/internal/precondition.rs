//! Sanity check on the target root before anything is touched.

use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// The root's final path segment must end with `suffix`.
///
/// Only the name is inspected; no project marker (pubspec.yaml) is required.
pub fn validate_root(root: &Path, suffix: &str) -> Result<()> {
    let matches = root
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix));

    if matches {
        Ok(())
    } else {
        Err(ScaffoldError::WrongDirectory {
            expected: suffix.to_string(),
            actual: root.to_path_buf(),
        })
    }
}
