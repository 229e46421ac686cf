//! Centralized configuration paths for linecursor
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/linecursor/`
//! - Windows: `%APPDATA%\linecursor\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "linecursor";

/// Base config directory for linecursor
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/linecursor`
///   - Else: `~/.config/linecursor`
///
/// Windows:
///   - `%APPDATA%\linecursor`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/linecursor/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/linecursor/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Failure to prepare a directory under the config dir
#[derive(Debug)]
pub enum ConfigPathError {
    /// Neither `XDG_CONFIG_HOME` nor a home directory is available
    NoConfigDir,
    CreateDir { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for ConfigPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "no config directory available"),
            Self::CreateDir { path, source } => {
                write!(f, "failed to create {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigPathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoConfigDir => None,
            Self::CreateDir { source, .. } => Some(source),
        }
    }
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, ConfigPathError> {
    let logs = logs_dir().ok_or(ConfigPathError::NoConfigDir)?;
    fs::create_dir_all(&logs).map_err(|source| ConfigPathError::CreateDir {
        path: logs.clone(),
        source,
    })?;
    Ok(logs)
}
