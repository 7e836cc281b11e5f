use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the recorded days.
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_activity_log")]
    pub activity_log: String,
    /// Refresh period of `watch`, in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// Show seconds in the current time of `status` and `watch`.
    #[serde(default)]
    pub show_seconds: bool,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_activity_log() -> String {
    Config::config_dir()
        .join("activity.log")
        .to_string_lossy()
        .to_string()
}
fn default_refresh_interval() -> u64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            activity_log: default_activity_log(),
            refresh_interval_secs: default_refresh_interval(),
            show_seconds: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpresence")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpresence")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpresence.conf")
    }

    /// Return the default path of the day store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("workdays.json")
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn activity_log_path(&self) -> PathBuf {
        expand_tilde(&self.activity_log)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing fields take their defaults.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Point the configuration at another store; the activity log follows
    /// it (`days.json` → `days.log`).
    pub fn override_store(&mut self, store: &str) {
        self.store = store.to_string();
        self.activity_log = expand_tilde(store)
            .with_extension("log")
            .to_string_lossy()
            .to_string();
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Config::default();

        // store name: user provided or default
        if let Some(name) = custom_store {
            let p = expand_tilde(&name);
            let p = if p.is_absolute() { p } else { dir.join(p) };
            config.override_store(&p.to_string_lossy());
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create an empty store if not exists
        let store = config.store_path();
        if !store.exists() {
            if let Some(parent) = store.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&store, "[]")?;
        }

        Ok(config)
    }
}
