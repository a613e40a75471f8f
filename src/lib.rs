pub mod config;
pub mod error;
pub mod events;
pub mod manifest;
pub mod runner;
pub mod scaffold;

// Re-export commonly used types
pub use config::{Config, OutputMode};
pub use error::ScaffoldError;
pub use events::{Event, EventSink};
pub use runner::{CommandExecutor, ShellExecutor};
pub use scaffold::{Scaffold, Summary};
