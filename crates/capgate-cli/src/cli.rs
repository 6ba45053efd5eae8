//! Argument parsing for the capgate binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "capgate", version, about = "Tool-access simulation playground")]
pub struct Cli {
    /// Path to the config file (defaults to ./capgate.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the completion endpoint.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the local completion relay holding the API credential.
    Serve {
        /// Port to bind on 127.0.0.1.
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
