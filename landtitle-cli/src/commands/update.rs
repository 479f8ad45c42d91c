//! `landtitle update <id> --owner <name> --value <n>`

use anyhow::{Context, Result};
use clap::Args;

use landtitle_core::TitleId;

use crate::config::Settings;

/// Change the owner and value of a title held by the caller's organization.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: String,

    /// New owner name.
    #[arg(long)]
    pub owner: String,

    /// New property value.
    #[arg(long)]
    pub value: f64,
}

impl UpdateArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let mut registry = settings.open_registry()?;
        let id = TitleId::from(self.id);
        let title = registry
            .update_land_title(&settings.identity, &id, self.owner, self.value)
            .with_context(|| format!("failed to update land title '{id}'"))?;

        println!(
            "✓ Updated '{}': owner '{}', value {}",
            title.id, title.owner, title.property_value
        );
        Ok(())
    }
}
