//! Global options and their environment fallbacks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use landtitle_core::{ClientIdentity, FileStore, OrgId, TitleRegistry};

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Directory holding `.landtitle/ledger/`. Defaults to the user's home.
    #[arg(long, global = true, env = "LANDTITLE_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Organization (MSP) credential of the caller. Required for create,
    /// update and transfer.
    #[arg(long = "msp-id", global = true, env = "LANDTITLE_MSP_ID", value_name = "ORG")]
    pub msp_id: Option<String>,
}

/// Resolved configuration for one invocation.
#[derive(Debug)]
pub struct Settings {
    /// Explicit ledger root; `None` means the user's home directory.
    pub home: Option<PathBuf>,
    pub identity: ClientIdentity,
}

impl GlobalArgs {
    pub fn resolve(self) -> Settings {
        Settings {
            home: self.home,
            identity: ClientIdentity::new(self.msp_id.map(OrgId::from)),
        }
    }
}

impl Settings {
    pub fn open_registry(&self) -> Result<TitleRegistry<FileStore>> {
        let store = match &self.home {
            Some(home) => FileStore::open_at(home).with_context(|| {
                format!("failed to open ledger under '{}'", home.display())
            })?,
            None => FileStore::open().context("failed to open ledger in home directory")?,
        };
        Ok(TitleRegistry::new(store))
    }
}
