use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{LanguageId, StyleRegistry};

pub const CONFIG_FILE_NAME: &str = ".nestcommentrc.json";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extra file extension -> language id mappings, checked before the built-in table.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
    /// Toggle multi-line selections line by line instead of as one block.
    #[serde(default)]
    pub per_line: bool,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an `extensions` entry maps to an unsupported language id.
    pub fn validate(&self) -> Result<()> {
        let registry = StyleRegistry::global();
        for (ext, language_id) in &self.extensions {
            if !registry.is_supported(language_id) {
                bail!(
                    "Unsupported language id in 'extensions': \"{}\" (for \"{}\")",
                    language_id,
                    ext
                );
            }
        }
        Ok(())
    }

    /// Language of `path`: configured extension mapping first, then the built-in table.
    pub fn language_for(&self, path: &Path) -> Option<LanguageId> {
        let ext = path.extension()?.to_str()?;
        self.extensions
            .iter()
            .find(|(key, _)| key.trim_start_matches('.').eq_ignore_ascii_case(ext))
            .and_then(|(_, id)| StyleRegistry::global().resolve(id).ok())
            .or_else(|| LanguageId::from_path(path))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
