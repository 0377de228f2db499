//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod outline;
pub(crate) mod resolve;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use outline::OutlineArgs;
pub(crate) use resolve::ResolveArgs;

/// Configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deployment base path (overrides config).
    #[arg(long, env = "SITENAV_BASE")]
    base: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base: self.base.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
