//! `landtitle create <id> --owner ... --description ... --value ... --document-hash ...`

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use landtitle_core::{TitleDraft, TitleId};

use crate::config::Settings;

/// Register a new land title under the caller's organization.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Unique title identifier.
    pub id: String,

    #[arg(long)]
    pub owner: String,

    /// Free-text property description.
    #[arg(long)]
    pub description: String,

    /// Monetary value of the property.
    #[arg(long)]
    pub value: f64,

    /// Content identifier of the supporting document (e.g. an IPFS CID).
    #[arg(long = "document-hash", value_name = "CID")]
    pub document_hash: String,

    /// Record date; defaults to today (UTC, `YYYY-MM-DD`).
    #[arg(long)]
    pub timestamp: Option<String>,
}

impl CreateArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let mut registry = settings.open_registry()?;
        let draft = TitleDraft {
            id: TitleId::from(self.id),
            owner: self.owner,
            property_description: self.description,
            property_value: self.value,
            timestamp: self
                .timestamp
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
            document_hash: self.document_hash,
        };
        let id = draft.id.clone();

        let title = registry
            .create_land_title(&settings.identity, draft)
            .with_context(|| format!("failed to create land title '{id}'"))?;

        println!(
            "✓ Created land title '{}' for organization '{}'",
            title.id, title.organization
        );
        Ok(())
    }
}
