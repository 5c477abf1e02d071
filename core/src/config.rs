// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::ExecOptions;
use crate::error::ConfigError;

/// The name of the Quill application.
pub const APP_NAME: &str = "quill";

/// File name of the task list inside the data directory.
pub const DATA_FILE_NAME: &str = "tasks.txt";

/// Configuration for the Quill core.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the task file. Defaults to `$XDG_DATA_HOME/quill/tasks.txt`.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Reject events that start after they end.
    #[serde(default)]
    pub strict_event_range: bool,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        self.data_path = Some(match &self.data_path {
            Some(path) => expand_path(path)?,
            None => get_data_dir()?.join(APP_NAME).join(DATA_FILE_NAME),
        });
        Ok(())
    }

    /// The options handed to every executed command.
    pub fn exec_options(&self) -> ExecOptions {
        ExecOptions {
            strict_event_range: self.strict_event_range,
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let data_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_DATA_HOME/", "${XDG_DATA_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in data_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_data_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::MissingDir("home"))
}

fn get_data_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_local_dir();
    data_dir.ok_or(ConfigError::MissingDir("data"))
}
