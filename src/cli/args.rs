//! CLI argument definitions using clap
//!
//! Commands:
//! - uplift entities
//! - uplift validate <entity> [--file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// uplift - A strict, validation-first domain core for a non-profit platform
#[derive(Parser, Debug)]
#[command(name = "uplift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the entity kinds and their insert contracts
    Entities,

    /// Validate a JSON document against an entity kind's insert contract
    Validate {
        /// Entity kind (e.g. "donation", "volunteer_event")
        entity: String,

        /// Path to a JSON file; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
