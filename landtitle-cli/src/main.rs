//! landtitle, the command-line client for the land-title ledger.
//!
//! # Usage
//!
//! ```text
//! landtitle [--home <dir>] [--msp-id <org>] init-ledger
//! landtitle create <id> --owner <name> --description <text> --value <n> --document-hash <cid> [--timestamp <date>]
//! landtitle read <id> [--json]
//! landtitle exists <id>
//! landtitle update <id> --owner <name> --value <n>
//! landtitle transfer <id> --to-owner <name> --to-org <org>
//! landtitle list [--json]
//! ```

mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use commands::{
    create::CreateArgs, exists::ExistsArgs, list::ListArgs, read::ReadArgs,
    transfer::TransferArgs, update::UpdateArgs,
};
use config::GlobalArgs;
use landtitle_core::{ErrorKind, RegistryError};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "landtitle",
    version,
    about = "Create, inspect and transfer land titles on a shared ledger",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed the ledger with the example titles.
    InitLedger,

    /// Register a new land title under the caller's organization.
    Create(CreateArgs),

    /// Show a single land title.
    Read(ReadArgs),

    /// Print whether a land title exists.
    Exists(ExistsArgs),

    /// Change the owner and value of a title held by the caller's organization.
    Update(UpdateArgs),

    /// Hand a title over to a new owner and organization.
    Transfer(TransferArgs),

    /// List every land title on the ledger.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_code(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.global.resolve();
    match cli.command {
        Commands::InitLedger => commands::init::run(&settings),
        Commands::Create(args) => args.run(&settings),
        Commands::Read(args) => args.run(&settings),
        Commands::Exists(args) => args.run(&settings),
        Commands::Update(args) => args.run(&settings),
        Commands::Transfer(args) => args.run(&settings),
        Commands::List(args) => args.run(&settings),
    }
}

/// Not-found, conflict and access-denied failures get their own exit codes.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<RegistryError>().map(RegistryError::kind) {
        Some(ErrorKind::NotFound) => ExitCode::from(3),
        Some(ErrorKind::Conflict) => ExitCode::from(4),
        Some(ErrorKind::AccessDenied) => ExitCode::from(5),
        _ => ExitCode::FAILURE,
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
