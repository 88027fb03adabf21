pub mod classify;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A3S Policy Scan - privacy practice detection for policy text
#[derive(Debug, Parser)]
#[command(name = "a3s-policy-scan", version, about)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $A3S_POLICY_SCAN_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify policy text from a file or stdin and print records as JSON
    Classify {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,

        /// Section identifier attached to every record
        #[arg(long, default_value = "section_0")]
        section_id: String,

        /// Split the text into sections before classifying
        #[arg(long)]
        document: bool,
    },

    /// Start the HTTP server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}
