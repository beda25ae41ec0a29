pub mod create;
pub mod view;
pub mod wallet;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "decentralizeit",
    version,
    about = "Create and publish petitions with wallet-backed verification"
)]
pub struct Cli {
    /// Path to a config file (defaults to ~/.decentralizeit/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Author a petition draft step by step and publish it.
    Create,
    /// Inspect or establish the wallet session.
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },
}

#[derive(Subcommand)]
pub enum WalletAction {
    /// Show the current wallet session.
    Status,
    /// Request wallet authorization.
    Connect,
}

pub async fn dispatch(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Create => create::run(&config).await,
        Commands::Wallet { action } => match action {
            WalletAction::Status => wallet::status(&config).await,
            WalletAction::Connect => wallet::connect(&config).await,
        },
    }
}
