use crate::lamps::LineSeparator;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub line_separator: LineSeparator,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when no path is given.
    ///
    /// An explicit path must exist. A missing file at the default location yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match get_config_dir() {
                Ok(dir) => Self::load_from_dir(&dir),
                Err(e) => {
                    debug!("No config directory available: {}", e);
                    Ok(Config::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Read `config.toml` from `dir` when it exists, otherwise fall back to the defaults.
    fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = config_path_in(dir);
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }
}

fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "berlin-uhr", "berlin-uhr")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
