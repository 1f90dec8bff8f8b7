//! CLI for the harx HAR extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harx_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_extract, run_list};

/// Top-level CLI for the harx HAR extractor.
#[derive(Debug, Parser)]
#[command(name = "harx")]
#[command(about = "harx: extract HAR captures into a browsable file tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract every HAR file found at INPUT into per-archive directories.
    Extract {
        /// HAR file, or directory scanned for *.har files.
        input: PathBuf,

        /// Output root for extracted trees (default: config value, else ./output).
        #[arg(long)]
        out: Option<PathBuf>,

        /// Keep zero-byte output files instead of deleting them.
        #[arg(long)]
        keep_empty: bool,

        /// Maximum generated file name length.
        #[arg(long, value_name = "N")]
        max_name_len: Option<usize>,
    },

    /// List the entries of one HAR file without extracting.
    List {
        /// Path to the HAR file.
        path: PathBuf,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract {
                input,
                out,
                keep_empty,
                max_name_len,
            } => run_extract(&cfg, &input, out.as_deref(), keep_empty, max_name_len)?,
            CliCommand::List { path } => run_list(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
