//! `landtitle init-ledger`

use anyhow::{Context, Result};

use landtitle_core::seed_titles;

use crate::config::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let mut registry = settings.open_registry()?;
    registry.init_ledger().context("failed to seed ledger")?;
    println!("✓ Seeded {} land titles", seed_titles().len());
    Ok(())
}
