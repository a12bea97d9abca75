//! Configuration file support (`.jsdupes.toml`).

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for in ancestor directories.
pub const CONFIG_FILENAME: &str = ".jsdupes.toml";

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section for jsdupes.
    #[serde(default)]
    pub jsdupes: JsdupesConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Configuration options for jsdupes.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct JsdupesConfig {
    /// Similarity threshold (0-100).
    pub threshold: Option<u8>,
    /// List of folders to exclude.
    pub exclude_folders: Option<Vec<String>>,
    /// File extensions to scan instead of the defaults.
    pub extensions: Option<Vec<String>>,
    /// Exit with code 1 when duplicates are found.
    pub fail_on_duplicates: Option<bool>,
}

impl Config {
    /// Loads configuration for the given scan path by walking up its
    /// ancestors until a `.jsdupes.toml` is found. Returns defaults when no
    /// file exists or one fails to parse.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Self>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }
            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}
