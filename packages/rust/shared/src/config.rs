//! Application configuration for StaffQuery.
//!
//! User config lives at `~/.staffquery/staffquery.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffQueryError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "staffquery.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".staffquery";

// ---------------------------------------------------------------------------
// Config structs (matching staffquery.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Where the roster comes from.
    #[serde(default)]
    pub roster: RosterConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Report output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = StaffQueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(StaffQueryError::config(format!(
                "unknown output format '{other}': expected 'text' or 'json'"
            ))),
        }
    }
}

/// `[roster]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// JSON roster file. The built-in sample roster is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Run settings (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime settings for one invocation, merged from config file + CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub format: OutputFormat,
    pub roster_path: Option<PathBuf>,
}

impl From<&AppConfig> for RunSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            format: config.defaults.format,
            roster_path: config.roster.path.clone(),
        }
    }
}

impl RunSettings {
    /// Apply CLI overrides on top of the config-derived values.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        roster_path: Option<PathBuf>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if roster_path.is_some() {
            self.roster_path = roster_path;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.staffquery/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| StaffQueryError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.staffquery/staffquery.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| StaffQueryError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        StaffQueryError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
///
/// An existing config file is left alone unless `force` is set.
pub fn init_config(force: bool) -> Result<PathBuf> {
    init_config_in(&config_dir()?, force)
}

/// [`init_config`] against an explicit config directory.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(StaffQueryError::config(format!(
            "config already exists at {}; pass --force to overwrite it",
            path.display()
        )));
    }

    std::fs::create_dir_all(dir).map_err(|e| StaffQueryError::io(dir, e))?;

    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| StaffQueryError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| StaffQueryError::io(&path, e))?;
    tracing::info!(?path, force, "wrote default config file");

    Ok(path)
}
