//! Command-line interface and config loading.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use nf_domain::config::Config;
use nf_domain::error::{Error, Result};

#[derive(Parser)]
#[command(name = "newsflow", version, about = "Conversational news feed resolution service")]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(long, short, global = true, default_value = "newsflow.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default when no subcommand is given).
    Serve,
    /// Config inspection helpers.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print the version.
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report problems.
    Validate,
    /// Print the effective config (defaults applied).
    Show,
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(path).map_err(Error::Io)?;
    toml::from_str(&raw).map_err(|e| Error::Config(format!("parsing {}: {e}", path.display())))
}
