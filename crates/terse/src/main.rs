// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! terse - condense notes into three shorter versions.
//!
//! This is the binary entry point for the terse CLI.

mod condense;
mod delete;
mod list;
mod show;
mod update;

use clap::{Parser, Subcommand};
use terse_core::TerseError;

/// Condense notes into three shorter versions via remote language models.
#[derive(Parser, Debug)]
#[command(name = "terse", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Condense a note and save the result.
    Condense {
        /// The note text to condense.
        text: String,
        /// Output the saved entry as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List all saved entries, most recent first.
    List {
        /// Output entries as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show one saved entry.
    Show {
        /// Entry id.
        id: i64,
        /// Output the entry as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Re-condense new text and overwrite an existing entry.
    Update {
        /// Entry id.
        id: i64,
        /// The replacement note text.
        text: String,
    },
    /// Delete a saved entry.
    Delete {
        /// Entry id.
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let config = match terse_config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result: Result<(), TerseError> = match cli.command {
        Commands::Condense { text, json } => condense::run_condense(&config, &text, json).await,
        Commands::List { json } => list::run_list(&config, json).await,
        Commands::Show { id, json } => show::run_show(&config, id, json).await,
        Commands::Update { id, text } => update::run_update(&config, id, &text).await,
        Commands::Delete { id } => delete::run_delete(&config, id).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber from RUST_LOG, defaulting to
/// warnings only so command output stays clean.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
