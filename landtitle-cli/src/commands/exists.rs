//! `landtitle exists <id>`

use anyhow::{Context, Result};
use clap::Args;

use landtitle_core::TitleId;

use crate::config::Settings;

/// Print `true` or `false`.
#[derive(Args, Debug)]
pub struct ExistsArgs {
    pub id: String,
}

impl ExistsArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let registry = settings.open_registry()?;
        let id = TitleId::from(self.id);
        let exists = registry
            .land_title_exists(&id)
            .with_context(|| format!("failed to look up land title '{id}'"))?;
        println!("{exists}");
        Ok(())
    }
}
