use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_scaffold::config::{Config, OutputMode, DEFAULT_VERIFY_COMMAND};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Lay down the layered folder structure for the Flutter to-do app", long_about = None)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output events as JSON lines
    #[arg(long)]
    json: bool,

    /// Run a command in the project afterwards (default: flutter analyze)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_VERIFY_COMMAND)]
    verify: Option<String>,
}

/// Diagnostics go to stderr; stdout carries the progress lines or JSON events
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todo_scaffold=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load_with_root(cli.root.as_deref())?;
    if cli.json {
        config.output = OutputMode::Json;
    }
    config.verify = cli.verify;

    let exit_code = commands::setup::execute(&config)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
