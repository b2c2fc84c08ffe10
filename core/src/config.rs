//! Runner configuration
//!
//! Settings only affect how the `stackvm` command presents a run; the
//! interpreter itself has no configuration. Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `stackvm.toml` in the working directory, or the file given by `--config`
//! 3. `STACKVM_*` environment variables (a `.env` file is loaded first)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File, FileFormat};

pub const DEFAULT_CONFIG_FILE: &str = "stackvm";
pub const ENV_PREFIX: &str = "STACKVM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON report per run
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Print each PRINT value as soon as it is recorded
    pub echo: bool,

    /// Print the final stack after a run
    pub show_stack: bool,

    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            echo: true,
            show_stack: true,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Load settings from the optional config file and the environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to load configuration")?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")?;

        tracing::debug!(?settings, "Configuration loaded");
        Ok(settings)
    }

    /// Parse settings from TOML text layered over the defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .context("Failed to parse configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Render the settings as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration")
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let d = Settings::default();
    let format = match d.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    let builder = ::config::Config::builder()
        .set_default("log_level", d.log_level)?
        .set_default("echo", d.echo)?
        .set_default("show_stack", d.show_stack)?
        .set_default("format", format)?;
    Ok(builder)
}
