use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::{Collection, parsers};

/// Configuration resolved for one command invocation.
pub struct CommandContext {
    pub config: Config,
    pub config_from_file: bool,
}

impl CommandContext {
    /// Load configuration starting from the current directory.
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::load_from(&cwd)
    }

    pub fn load_from(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        Ok(Self {
            config: loaded.config,
            config_from_file: loaded.from_file,
        })
    }

    pub fn input_path(&self, common: &CommonArgs) -> PathBuf {
        common
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.input))
    }

    pub fn merge_collections(&self, common: &CommonArgs) -> bool {
        common.merge_collections || self.config.merge_collections
    }

    /// Read and parse the token source named by the arguments or config.
    pub fn read_collections(&self, common: &CommonArgs) -> Result<(PathBuf, Vec<Collection>)> {
        let input = self.input_path(common);
        let text = read_source(&input)?;
        let mut collections = parsers::parse(&text);
        if self.merge_collections(common) {
            collections = parsers::merge_repeated(collections);
        }
        Ok((input, collections))
    }
}

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read token source: {}", path.display()))
}
