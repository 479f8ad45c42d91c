//! `landtitle read <id> [--json]`

use anyhow::{Context, Result};
use clap::Args;

use landtitle_core::TitleId;

use crate::config::Settings;

/// Show a single land title.
#[derive(Args, Debug)]
pub struct ReadArgs {
    pub id: String,

    /// Emit the stored JSON record.
    #[arg(long)]
    pub json: bool,
}

impl ReadArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let registry = settings.open_registry()?;
        let id = TitleId::from(self.id);
        let title = registry
            .read_land_title(&id)
            .with_context(|| format!("failed to read land title '{id}'"))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&title).context("failed to serialize title JSON")?
            );
        } else {
            super::print_title(&title);
        }
        Ok(())
    }
}
