use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-user table and logbook files.
    pub data_dir: String,
    /// YAML map of username -> password. Plaintext by design; swap the
    /// credential store implementation for anything stronger.
    pub credentials_file: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            credentials_file: Self::credentials_file_default()
                .to_string_lossy()
                .to_string(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("prodtrack")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".prodtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prodtrack.conf")
    }

    fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    fn credentials_file_default() -> PathBuf {
        Self::config_dir().join("users.yaml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, data directory and a seed credentials file.
    pub fn init_all() -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        fs::create_dir_all(&config.data_dir)?;

        let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
        fs::write(Self::config_file(), yaml)?;

        // Seed credentials only when absent, never clobber an edited file.
        let creds = PathBuf::from(&config.credentials_file);
        if !creds.exists() {
            let mut seed = BTreeMap::new();
            seed.insert("admin".to_string(), "admin".to_string());
            let yaml = serde_yaml::to_string(&seed).map_err(io::Error::other)?;
            fs::write(&creds, yaml)?;
        }

        Ok(())
    }
}
