//! `landtitle list [--json]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use landtitle_core::LandTitle;

use crate::config::Settings;

/// Arguments for `landtitle list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON (an array of stored records).
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct TitleTableRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "owner")]
    owner: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "value")]
    value: f64,
    #[tabled(rename = "document")]
    document: String,
    #[tabled(rename = "timestamp")]
    timestamp: String,
    #[tabled(rename = "organization")]
    organization: String,
}

impl From<LandTitle> for TitleTableRow {
    fn from(t: LandTitle) -> Self {
        Self {
            id: t.id.0,
            owner: t.owner,
            description: t.property_description,
            value: t.property_value,
            document: t.document_hash,
            timestamp: t.timestamp,
            organization: t.organization.0,
        }
    }
}

impl ListArgs {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let registry = settings.open_registry()?;
        let titles = registry
            .get_all_land_titles()
            .context("failed to list land titles")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&titles).context("failed to serialize titles JSON")?
            );
            return Ok(());
        }

        if titles.is_empty() {
            println!("No land titles on the ledger.");
            println!("Run: landtitle init-ledger");
            return Ok(());
        }

        let count = titles.len();
        let rows: Vec<TitleTableRow> = titles.into_iter().map(TitleTableRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{}", format!("{count} land titles").bright_black());
        Ok(())
    }
}
