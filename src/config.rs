//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Name of the environment variable consulted when neither the command line
/// nor the config file names a store.
pub const ENVIRONMENT_VAR: &str = "FOOD_DASHBOARD_ENVIRONMENT";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the food store, e.g. `http://localhost:3333`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Whether the dashboard paints a background colour.
    #[serde(default)]
    pub with_background_color: bool,
}

impl Config {
    /// Create Config pointing at the given store.
    pub fn new(api_url: Option<String>, with_background_color: bool) -> Self {
        Config {
            api_url,
            with_background_color,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Picks the store to talk to.
    ///
    /// Precedence: explicit URL, config file, `env_value` (the contents of
    /// [`ENVIRONMENT_VAR`]), then the local default.
    pub fn resolve_environment(
        &self,
        cli_api_url: Option<&str>,
        env_value: Option<&str>,
    ) -> Environment {
        if let Some(url) = cli_api_url {
            return Environment::Custom {
                api_url: url.to_string(),
            };
        }
        if let Some(url) = &self.api_url {
            return Environment::Custom {
                api_url: url.clone(),
            };
        }
        env_value
            .and_then(|value| value.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

/// Location of the config file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to determine home directory",
        )
    })?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}
