use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{TrackerError, TrackerResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub week_start: WeekStart,
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 200,
            week_start: WeekStart::Monday,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .as_deref()
            .and_then(expand_path)
            .or_else(default_log_path)
            .unwrap_or_else(|| PathBuf::from("comm-tracker.log"))
    }
}

/// Load from `explicit` or the default location. A missing file means defaults.
pub fn load(explicit: Option<&Path>) -> TrackerResult<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_path(),
    };
    let Some(path) = path else {
        return Ok((Config::default(), None));
    };
    match load_from(&path)? {
        Some(config) => Ok((config, Some(path))),
        None => Ok((Config::default(), None)),
    }
}

pub fn load_from(path: &Path) -> TrackerResult<Option<Config>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(TrackerError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content, path).map(Some)
}

pub fn parse(content: &str, path: &Path) -> TrackerResult<Config> {
    toml::from_str::<Config>(content).map_err(|source| TrackerError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("COMM_TRACKER_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("comm-tracker").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("comm-tracker").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "comm-tracker", "comm-tracker")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("comm-tracker"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("comm-tracker"));
    }
    directories::ProjectDirs::from("io", "comm-tracker", "comm-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("comm-tracker.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    Some(PathBuf::from(trimmed))
}
