// Configuration loaded from YAML

use crate::date::DEFAULT_LOCALE;
use crate::sqlite::SqliteStorage;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::store::DEFAULT_KEY;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const APP_NAME: &str = "todostore";
pub const CONFIG_ENV: &str = "TODOSTORE_CONFIG";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display locale for due dates
    pub locale: String,
    pub log_level: String,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            log_level: "warn".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    /// Data directory; defaults to the platform data dir
    pub path: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            path: None,
            key: DEFAULT_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    File,
    Sqlite,
    Memory,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path (flag or `TODOSTORE_CONFIG`) must exist. The default
    /// location is optional and falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match explicit {
            Some(path) => Self::from_file(&path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        info!(path = ?path, "Loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse YAML config")
    }

    /// Directory holding stored data
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or_else(|| eyre!("Could not determine data directory"))
    }

    /// Open the configured storage backend
    pub fn open_storage(&self) -> Result<Box<dyn Storage>> {
        let storage: Box<dyn Storage> = match self.storage.backend {
            Backend::File => {
                let dir = self.data_dir()?;
                Box::new(FileStorage::open(dir).context("Failed to open file storage")?)
            }
            Backend::Sqlite => {
                let dir = self.data_dir()?;
                Box::new(SqliteStorage::open(dir).context("Failed to open SQLite storage")?)
            }
            Backend::Memory => Box::new(MemoryStorage::new()),
        };
        Ok(storage)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}
