//! Configuration loading and root folder resolution
//!
//! Two layers:
//! 1. **TOML bootstrap**: root folder, default step, currency label, logging
//! 2. **Database state**: people list and chosen step (see [`crate::store`])
//!
//! Root folder priority order:
//! 1. Command-line argument (highest priority)
//! 2. `FINEDOUT_ROOT_FOLDER`, then `FINEDOUT_ROOT` environment variable
//! 3. TOML config file `root_folder`
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing config file is never an error; a file that exists but does not
//! parse is.

use crate::ledger::{DEFAULT_STEP_AMOUNT, MIN_STEP_AMOUNT};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Primary environment variable naming the root folder
pub const ROOT_FOLDER_ENV: &str = "FINEDOUT_ROOT_FOLDER";

/// Alternative environment variable naming the root folder
pub const ROOT_ENV: &str = "FINEDOUT_ROOT";

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "finedout.db";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Folder holding the database (optional)
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Step used until the user picks one
    #[serde(default = "default_step_amount")]
    pub default_step_amount: u64,

    /// Currency label shown next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            root_folder: None,
            default_step_amount: default_step_amount(),
            currency: default_currency(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_step_amount() -> u64 {
    DEFAULT_STEP_AMOUNT
}

fn default_currency() -> String {
    "AFN".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl TomlConfig {
    /// Parse a config file's contents
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        if config.default_step_amount < MIN_STEP_AMOUNT {
            return Err(Error::Config(format!(
                "default_step_amount must be at least {}",
                MIN_STEP_AMOUNT
            )));
        }
        if config.currency.trim().is_empty() {
            return Err(Error::Config("currency must not be blank".to_string()));
        }
        Ok(config)
    }

    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one, the platform
    /// config file is used if present, otherwise defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded TOML configuration from {:?}", path);
        Ok(config)
    }
}

/// Platform config file location (`<config_dir>/finedout/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("finedout").join("config.toml"))
}

/// Compiled fallback values for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: get_default_root_folder(),
        }
    }
}

/// Get OS-dependent default root folder path
fn get_default_root_folder() -> PathBuf {
    if cfg!(target_os = "macos") {
        // ~/Library/Application Support/finedout
        dirs::data_dir()
            .map(|d| d.join("finedout"))
            .unwrap_or_else(|| PathBuf::from("./finedout_data"))
    } else {
        // ~/.local/share/finedout, %LOCALAPPDATA%\finedout
        dirs::data_local_dir()
            .map(|d| d.join("finedout"))
            .unwrap_or_else(|| PathBuf::from("./finedout_data"))
    }
}

/// Resolves the root folder following the priority order above
#[derive(Debug, Clone, Default)]
pub struct RootFolderResolver {
    cli_arg: Option<PathBuf>,
    toml_root: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    pub fn with_toml_config(mut self, config: &TomlConfig) -> Self {
        self.toml_root = config.root_folder.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_arg {
            info!("Root folder: {:?} (from command line)", path);
            return path.clone();
        }

        // Priority 2: Environment variables
        for var in [ROOT_FOLDER_ENV, ROOT_ENV] {
            match std::env::var(var) {
                Ok(path) if !path.trim().is_empty() => {
                    info!("Root folder: {} (from {})", path, var);
                    return PathBuf::from(path);
                }
                Ok(_) => warn!("Ignoring empty {}", var),
                Err(_) => {}
            }
        }

        // Priority 3: TOML config file
        if let Some(path) = &self.toml_root {
            info!("Root folder: {:?} (from config file)", path);
            return path.clone();
        }

        // Priority 4: OS-dependent compiled default
        let path = CompiledDefaults::for_current_platform().root_folder;
        info!("Root folder: {:?} (default)", path);
        path
    }
}

/// Prepares the resolved root folder for use
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_path(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    /// Create the root folder if needed (idempotent)
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
            info!("Created root folder {:?}", self.root);
        } else if !self.root.is_dir() {
            return Err(Error::Config(format!(
                "Root folder {:?} exists but is not a directory",
                self.root
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = TomlConfig::default();
        assert_eq!(config.default_step_amount, 5);
        assert_eq!(config.currency, "AFN");
        assert_eq!(config.logging.level, "warn");
        assert!(config.root_folder.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn test_full_toml_parses() {
        let config = TomlConfig::from_toml_str(
            r#"
            root_folder = "/srv/finedout"
            default_step_amount = 10
            currency = "EUR"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.root_folder, Some(PathBuf::from("/srv/finedout")));
        assert_eq!(config.default_step_amount, 10);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_zero_default_step_rejected() {
        let result = TomlConfig::from_toml_str("default_step_amount = 0");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_blank_currency_rejected() {
        let result = TomlConfig::from_toml_str("currency = \"  \"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = TomlConfig::from_toml_str("default_step_amount = [");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_cli_arg_wins_over_toml() {
        let config = TomlConfig {
            root_folder: Some(PathBuf::from("/from/toml")),
            ..TomlConfig::default()
        };
        let resolver = RootFolderResolver::new()
            .with_toml_config(&config)
            .with_cli_arg(Some(PathBuf::from("/from/cli")));

        assert_eq!(resolver.resolve(), PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_initializer_database_path() {
        let root = PathBuf::from("/tmp/finedout-test-root");
        let initializer = RootFolderInitializer::new(root.clone());
        assert_eq!(initializer.database_path(), root.join("finedout.db"));
    }
}
