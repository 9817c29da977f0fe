use crate::case::Convention;
use crate::cli::output::OutputFormat;
use crate::text::IndentKind;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".wordcase.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convention: Convention,

    #[serde(default)]
    pub indent: IndentKind,

    #[serde(default)]
    pub omit_empty_lines: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

/// One config file as written; keys the file leaves out stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub convention: Option<Convention>,
    pub indent: Option<IndentKind>,
    pub omit_empty_lines: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Values given on the command line; `None` leaves the file setting alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub convention: Option<Convention>,
    pub indent: Option<IndentKind>,
    pub omit_empty_lines: bool,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global_path = Self::global_config_path();
        Self::load_from(
            global_path.as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            debug!(path = %local.display(), "loading local config");
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(convention) = overrides.convention {
            config.convention = convention;
        }
        if let Some(indent) = overrides.indent {
            config.indent = indent;
        }
        if overrides.omit_empty_lines {
            config.omit_empty_lines = true;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }

        debug!(?config, "configuration resolved");
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply every key `file` sets, including ones equal to the defaults.
    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(convention) = file.convention {
            self.convention = convention;
        }
        if let Some(indent) = file.indent {
            self.indent = indent;
        }
        if let Some(omit_empty_lines) = file.omit_empty_lines {
            self.omit_empty_lines = omit_empty_lines;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
