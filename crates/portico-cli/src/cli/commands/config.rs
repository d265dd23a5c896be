//! Config command handlers.

use anyhow::Result;
use portico_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = paths::config_path();
    Config::init(&path)?;
    println!("Created config at {}", path.display());
    Ok(())
}
