//! # Gusto Console Library
//!
//! Interactive text front end for the Gusto restaurant manager.
//! `main.rs` only calls [`run`]; everything else lives here so it can be
//! driven from tests with in-memory input and output.
//!
//! ## Module Organization
//! ```text
//! gusto_console/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── console.rs      ◄─── Menu loop and dispatch
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu_items.rs
//! │   ├── orders.rs
//! │   └── customers.rs
//! ├── prompt.rs       ◄─── Question/answer line I/O
//! ├── render.rs       ◄─── Listing layouts
//! ├── config.rs       ◄─── Environment configuration
//! └── error.rs        ◄─── Operator-facing errors
//! ```
//!
//! ## Streams
//! ```text
//! stdin ──► Prompt ──► Console ──► Restaurant (gusto-core)
//!                         │
//!                         ├──► stdout   menus, prompts, results
//!                         └──► stderr   tracing output
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod render;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use console::Console;

/// Runs an interactive session on the process's standard streams.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • GUSTO_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Run Menu Loop ────────────────────────────────────────────────────► │
/// │     • Empty restaurant, held in memory until exit                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConsoleConfig::from_env();
    info!(?config, "Starting Gusto console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(config, stdin.lock(), stdout.lock());
    console.run()?;

    info!("Gusto console stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show rejected commands and reads
/// - `RUST_LOG=gusto_core=trace` - Trace the core crate only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
