pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "pantry"))]
#[cfg_attr(feature = "cli", command(about = "Print the pantry's ingredient list"))]
pub struct CliConfig {
    /// Kind of ingredients to ask for (accepted, has no effect on the list)
    #[cfg_attr(feature = "cli", arg(long))]
    pub kind: Option<String>,

    /// Output format
    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

/// Settings after merging flags over the config file over defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub kind: Option<String>,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let section = file.map(|f| &f.pantry);

        let kind = cli
            .kind
            .clone()
            .or_else(|| section.and_then(|s| s.default_kind.clone()));
        let format = cli
            .format
            .or_else(|| section.and_then(|s| s.format))
            .unwrap_or_default();

        Self { kind, format }
    }

    /// Loads the file named by `--config` (if any), validates everything and merges.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;

        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        Ok(Self::resolve(cli, file.as_ref()))
    }
}
