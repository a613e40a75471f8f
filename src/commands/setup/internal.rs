//! Internal implementation for setup command

use anyhow::{Context, Result};
use colored::*;

use todo_scaffold::config::{Config, OutputMode};
use todo_scaffold::events::{ConsoleSink, EventSink, JsonLinesSink};
use todo_scaffold::runner::{run_command, CommandExecutor};
use todo_scaffold::scaffold::{Scaffold, Summary};
use todo_scaffold::ScaffoldError;

use super::EXIT_WRONG_DIRECTORY;

/// Main execution logic for setup command
pub fn execute_setup(config: &Config, executor: &dyn CommandExecutor) -> Result<i32> {
    match config.output {
        OutputMode::Human => run(config, executor, &mut ConsoleSink),
        OutputMode::Json => run(config, executor, &mut JsonLinesSink::stdout()),
    }
}

fn run(config: &Config, executor: &dyn CommandExecutor, sink: &mut dyn EventSink) -> Result<i32> {
    let human = config.output == OutputMode::Human;
    let scaffold = Scaffold::new(&config.root).with_required_suffix(&config.required_suffix);

    if let Err(e) = scaffold.validate() {
        report_wrong_directory(&scaffold, config.output, &e);
        return Ok(EXIT_WRONG_DIRECTORY);
    }

    if human {
        println!("🎨 Setting up Flutter To-Do App folder structure...\n");
    }

    let summary = scaffold
        .run(sink)
        .with_context(|| format!("Failed to scaffold {}", scaffold.root().display()))?;

    let verified = config
        .verify
        .as_deref()
        .map(|command| run_command(executor, sink, command, Some(scaffold.root())));

    if human {
        print_next_steps(&summary, verified);
    }

    Ok(0)
}

fn report_wrong_directory(scaffold: &Scaffold, output: OutputMode, error: &ScaffoldError) {
    tracing::debug!("precondition failed: {error}");
    let hint = format!(
        "Please run this from within the {} directory (or pass --root)",
        scaffold.required_suffix()
    );
    let current = format!("Current directory: {}", scaffold.root().display());

    match output {
        OutputMode::Human => {
            println!("{}", hint.red());
            println!("{current}");
        }
        // Keep stdout clean for the event stream
        OutputMode::Json => {
            eprintln!("{hint}");
            eprintln!("{current}");
        }
    }
}

fn print_next_steps(summary: &Summary, verified: Option<bool>) {
    println!();
    println!("{}", "✅ Folder structure setup complete!".green().bold());
    println!(
        "   {} directories, {} files, {} legacy paths removed",
        summary.directories, summary.files, summary.removed
    );

    match verified {
        Some(true) => println!("   ✓ Verify command passed"),
        Some(false) => println!("   {}", "⚠️  Verify command failed (see output above)".yellow()),
        None => {}
    }

    println!("\n{}", "Next steps:".bold());
    println!("1. Run 'flutter run' to verify the app builds");
    println!("2. Confirm you see a blank screen (this is expected)");
}
