//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::manifest::DEFAULT_MANIFEST;

/// envexist - Check that every module's environment variables are set.
#[derive(Debug, Parser)]
#[command(name = "envexist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Manifest declaring modules and their variables
    #[arg(
        short,
        long,
        global = true,
        env = "ENVEXIST_MANIFEST",
        default_value = DEFAULT_MANIFEST
    )]
    pub manifest: PathBuf,

    /// Layer a dotenv file over the process environment (repeatable, later wins)
    #[arg(long = "env-file", global = true)]
    pub env_files: Vec<PathBuf>,

    /// Hide values of secret-looking variables
    #[arg(long, global = true)]
    pub mask_secrets: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the environment (default if no command specified)
    Check(CheckArgs),

    /// Show every declared variable
    List(ListArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print the resolved variables as KEY=value on success
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
