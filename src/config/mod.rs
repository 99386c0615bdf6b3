#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "coop-admin")]
#[command(about = "Checks sale-cycle dates and product form input for the cooperative admin")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long = "config", global = true, help = "TOML settings file")]
    pub settings_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a sale cycle's dates against its type
    Cycle {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long = "type")]
        cycle_type: Option<String>,
    },
    /// Apply the BRL input mask to raw text
    Mask { raw: String },
    /// Parse BRL text into an amount
    Parse { text: String },
    /// Check a product form snapshot given as JSON
    Product {
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
        #[arg(long)]
        file: Option<String>,
        #[arg(long, help = "Print the normalized product when the form is valid")]
        submit: bool,
    },
}
