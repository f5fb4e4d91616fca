//! CLI for the ccad asset downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ccad_core::config;
use std::path::PathBuf;

use commands::{run_catalog, run_download, run_status};

const DEFAULT_OUTPUT: &str = "chicken-cross-assets";

/// Top-level CLI for the ccad asset downloader.
#[derive(Debug, Parser)]
#[command(name = "ccad")]
#[command(about = "ccad: one-shot Chicken Cross game asset downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the full asset set (metadata, atlases, audio), skipping
    /// files already present.
    Run {
        /// Output directory for the asset tree.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Verify TLS certificates even if the config disables verification.
        #[arg(long)]
        verify_tls: bool,
    },

    /// Count the files already present in each output directory (no network).
    Status {
        /// Output directory to inspect.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Print the embedded asset catalogs.
    Catalog,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { output, verify_tls } => {
                let mut cfg = cfg;
                if verify_tls {
                    cfg.insecure_transport = false;
                }
                run_download(&cfg, &output)?;
            }
            CliCommand::Status { output } => run_status(&output)?,
            CliCommand::Catalog => run_catalog(),
        }

        Ok(())
    }
}
