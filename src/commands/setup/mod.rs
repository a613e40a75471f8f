//! Set up the to-do app folder structure
//!
//! Public interface for the default command; the run itself lives in
//! internal.rs.

mod internal;

use anyhow::Result;

use todo_scaffold::config::Config;
use todo_scaffold::runner::ShellExecutor;

/// Exit code when the root fails the directory-name check
pub const EXIT_WRONG_DIRECTORY: i32 = 1;

/// Execute the setup command
///
/// # Process
///
/// 1. **Precondition**: the root's name must end with the required suffix
/// 2. **Cleanup**: removes `lib/main.dart` and `test/`
/// 3. **Structure**: creates the layer directories under `lib/`
/// 4. **Files**: writes `lib/main.dart` from its template and every placeholder empty
/// 5. **Verify** (optional): runs the verify command in the root
///
/// Returns the process exit code. Filesystem faults are returned as errors;
/// a failed verify command is reported but still exits 0.
pub fn execute(config: &Config) -> Result<i32> {
    internal::execute_setup(config, &ShellExecutor)
}
