use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::AliasScope;

pub const CONFIG_FILE_NAME: &str = ".tokensyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Annotated CSS source to read.
    #[serde(default = "default_input")]
    pub input: String,
    /// JSON file holding the variable store.
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default)]
    pub alias_scope: AliasScope,
    #[serde(default)]
    pub merge_collections: bool,
}

fn default_input() -> String {
    "tokens.css".to_string()
}

fn default_store() -> String {
    "tokens.store.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            store: default_store(),
            alias_scope: AliasScope::default(),
            merge_collections: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Paths must be non-empty and the store must not overwrite the input.
    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            bail!("'input' must not be empty");
        }
        if self.store.trim().is_empty() {
            bail!("'store' must not be empty");
        }
        if Path::new(&self.input) == Path::new(&self.store) {
            bail!(
                "'store' must differ from 'input' (both are \"{}\")",
                self.input
            );
        }
        Ok(())
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
            let content = fs::read_to_string(&path)?;
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
