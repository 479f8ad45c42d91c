//! `landtitle transfer <id> --to-owner <name> --to-org <org>`

use anyhow::{Context, Result};
use clap::Args;

use landtitle_core::{OrgId, TitleId};

use crate::config::Settings;

/// Hand a title over to a new owner and organization. The caller's
/// organization loses write access once this succeeds.
#[derive(Args, Debug)]
pub struct TransferArgs {
    pub id: String,

    #[arg(long = "to-owner", value_name = "NAME")]
    pub to_owner: String,

    /// Organization that will control the title afterwards.
    #[arg(long = "to-org", value_name = "ORG")]
    pub to_org: String,
}

impl TransferArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let mut registry = settings.open_registry()?;
        let id = TitleId::from(self.id);
        let title = registry
            .transfer_land_title(
                &settings.identity,
                &id,
                self.to_owner,
                OrgId::from(self.to_org),
            )
            .with_context(|| format!("failed to transfer land title '{id}'"))?;

        println!(
            "✓ Transferred '{}' to '{}' ({})",
            title.id, title.owner, title.organization
        );
        Ok(())
    }
}
