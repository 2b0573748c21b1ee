use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON ledger document (`~/` is expanded).
    #[serde(default = "default_ledger")]
    pub ledger: String,
    /// Width of the bars drawn by `list`.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    /// Show reason/requester columns in `list`.
    #[serde(default = "default_show_reason")]
    pub show_reason: bool,
}

fn default_ledger() -> String {
    Config::ledger_file().to_string_lossy().to_string()
}
fn default_bar_width() -> usize {
    40
}
fn default_show_reason() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            bar_width: default_bar_width(),
            show_reason: default_show_reason(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("otledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".otledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("otledger.conf")
    }

    /// Return the default path of the ledger document
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("ot.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger)
    }

    /// Build the configuration for `init` and, unless `is_test`, write it.
    ///
    /// A relative `custom_ledger` is placed inside the config directory.
    pub fn init_all(custom_ledger: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let ledger_path = match custom_ledger {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::ledger_file(),
        };

        let config = Config {
            ledger: ledger_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}
