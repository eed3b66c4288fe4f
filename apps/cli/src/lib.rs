//! # MiniCart CLI Library
//!
//! Core library for the MiniCart terminal application.
//! `run()` wires logging, configuration and the interactive session.
//!
//! ## Module Organization
//! ```text
//! minicart_cli_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── ConfigState (defaults + MINICART_* env)
//! ├── command.rs      ◄─── Menu keywords
//! ├── session.rs      ◄─── Menu loop / state machine
//! ├── render.rs       ◄─── Text for catalog, cart, discounts, receipt
//! └── error.rs        ◄─── CliError and user-facing messages
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConfigState;
use error::CliResult;
use session::Session;

/// Runs the interactive application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: errors only, override with RUST_LOG                      │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • Defaults, then MINICART_* overrides                               │
/// │                                                                         │
/// │  3. Run Session                                                         │
/// │     • Standard catalog, discounts and exchange rates                    │
/// │     • Loop until `exit` or end of input                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> CliResult<()> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(store = %config.store_name, currency = %config.currency_code, "Starting MiniCart");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Every command, plus the JSON receipt at checkout
/// - `RUST_LOG=minicart_cli_lib=warn` - Rejected input only
/// - Default: ERROR level, so the menu stays uncluttered
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    // Ignored when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
