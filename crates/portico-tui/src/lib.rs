//! Full-screen TUI implementation for the Portico auth page.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{alert, form};
use portico_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive auth page.
pub async fn run_auth_page(config: &Config) -> Result<()> {
    // The auth page requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The auth page requires a terminal.\n\
             Use `portico login` / `portico signup` for non-interactive submission."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;

    Ok(())
}
