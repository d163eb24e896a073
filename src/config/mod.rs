use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_input_csv")]
    pub input_csv: String,
    #[serde(default = "default_output_html")]
    pub output_html: String,
}

fn default_database() -> String {
    "guardias.db".to_string()
}
fn default_input_csv() -> String {
    "guardias.csv".to_string()
}
fn default_output_html() -> String {
    "analisis_guardias_abogados.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            input_csv: default_input_csv(),
            output_html: default_output_html(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("guardias")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".guardias")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("guardias.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            debug!(config = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse a YAML document; missing keys take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input_csv)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_html)
    }

    /// Write the configuration file, unless running in test mode.
    /// Returns the path of the file (written or not).
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::Config(format!("cannot create {}: {}", dir.display(), e))
        })?;

        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }
}
