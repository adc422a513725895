use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::description::DEFAULT_DESCRIPTION_PREFIX;
use crate::domain::CliCommand;
use crate::error::{ReleaseError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "clasp-release.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".clasp-release.toml";

/// Represents the complete configuration for clasp-release.
///
/// Contains how to invoke clasp, release description settings, and optional hooks.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub cli: CliConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Returns the default program used to launch clasp.
fn default_program() -> String {
    if cfg!(windows) {
        "npx.cmd".to_string()
    } else {
        "npx".to_string()
    }
}

/// Returns the default arguments placed before every clasp subcommand.
fn default_args() -> Vec<String> {
    vec!["clasp".to_string()]
}

/// How the clasp CLI is invoked.
///
/// Every subcommand is run as `<program> <args...> <subcommand...>`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CliConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl CliConfig {
    /// Base command for a clasp subcommand, without the subcommand itself
    pub fn base_command(&self) -> CliCommand {
        CliCommand::new(self.program.clone()).args(self.args.iter().cloned())
    }
}

fn default_description_prefix() -> String {
    DEFAULT_DESCRIPTION_PREFIX.to_string()
}

/// Settings for the created version and deployment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_description_prefix")]
    pub description_prefix: String,

    /// Existing deployment to update instead of creating a new one
    #[serde(default)]
    pub deployment_id: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            description_prefix: default_description_prefix(),
            deployment_id: None,
        }
    }
}

/// Paths to optional hook scripts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct HooksConfig {
    #[serde(default)]
    pub pre_push: Option<String>,

    #[serde(default)]
    pub post_version: Option<String>,

    #[serde(default)]
    pub post_deploy: Option<String>,
}

impl Config {
    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(text).map_err(|e| ReleaseError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.cli.program.trim().is_empty() {
            return Err(ReleaseError::config("cli.program must not be empty"));
        }

        if let Some(id) = &self.release.deployment_id {
            if id.trim().is_empty() {
                return Err(ReleaseError::config(
                    "release.deployment_id must not be empty when set",
                ));
            }
        }

        Ok(())
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE))
}

fn read_config_file(path: &Path) -> Result<Config> {
    debug!("reading config file from {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| {
        ReleaseError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Config::from_toml_str(&text).map_err(|e| match e {
        ReleaseError::Config(msg) => ReleaseError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `clasp-release.toml` in current directory
/// 3. `.clasp-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config_file(Path::new(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config_file(&local);
    }

    if let Some(user) = user_config_path() {
        if user.exists() {
            return read_config_file(&user);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}
