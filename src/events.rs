//! Progress events emitted while scaffolding.
//!
//! Every filesystem action and command result becomes an [`Event`] handed to
//! a caller-supplied [`EventSink`]. The CLI prints them; tests collect them
//! into a `Vec<Event>`.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    PathRemoved {
        path: PathBuf,
        kind: EntryKind,
    },
    DirectoryCreated {
        path: PathBuf,
    },
    FileWritten {
        path: PathBuf,
        bytes: usize,
    },
    CommandSucceeded {
        command: String,
    },
    /// The command ran but exited non-zero (or was killed by a signal).
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
    /// The command could not be started at all.
    CommandLaunchFailed {
        command: String,
        message: String,
    },
    Completed {
        directories: usize,
        files: usize,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::PathRemoved { path, kind } => write!(f, "Removed {kind}: {}", path.display()),
            Event::DirectoryCreated { path } => write!(f, "Created directory: {}", path.display()),
            Event::FileWritten { path, .. } => write!(f, "Created file: {}", path.display()),
            Event::CommandSucceeded { command } => write!(f, "Command succeeded: {command}"),
            Event::CommandFailed {
                command, stderr, ..
            } => write!(
                f,
                "Error running command: {command}\nError output: {}",
                stderr.trim_end()
            ),
            Event::CommandLaunchFailed { command, message } => {
                write!(f, "Exception running command {command}: {message}")
            }
            Event::Completed { directories, files } => write!(
                f,
                "Folder structure setup complete ({directories} directories, {files} files)"
            ),
        }
    }
}

/// Receiver for progress events.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

/// Human-readable progress lines on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: Event) {
        println!("{event}");
    }
}

/// One JSON object per event, written to any `Write` (stdout by default).
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn emit(&mut self, event: Event) {
        // Reporting is best-effort; a closed stdout must not abort the run.
        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("failed to serialize event {event:?}: {e}");
                return;
            }
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!("failed to write event: {e}");
        }
    }
}
