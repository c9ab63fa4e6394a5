use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_LOG_LEVEL, KNOWN_SERVERS_FILES, KNOWN_SERVERS_METADATA_FILE, KNOWN_SERVERS_URL_BASE,
};
use crate::targets::WriteMode;
use crate::types::Environment;
use config::Config as RConfig;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub url_base: String,
    /// Applied after deserializing, paths need not be valid UTF-8.
    #[serde(skip)]
    pub target_path: PathBuf,
    pub log_level: String,
    pub write_mode: WriteMode,
}

impl Config {
    pub fn metadata_url(&self) -> String {
        format!("{}{KNOWN_SERVERS_METADATA_FILE}", self.base())
    }

    pub fn environments(&self) -> Vec<Environment> {
        KNOWN_SERVERS_FILES
            .iter()
            .map(|(name, file)| Environment {
                name: name.to_string(),
                url: format!("{}{file}", self.base()),
            })
            .collect()
    }

    fn base(&self) -> String {
        if self.url_base.ends_with('/') {
            self.url_base.clone()
        } else {
            format!("{}/", self.url_base)
        }
    }
}

/// Values given on the command line; `None` keeps the default.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub url_base: Option<String>,
    pub target_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub write_mode: Option<WriteMode>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_default_config() -> Result<Config> {
        Self::load(ConfigOverrides::default())
    }

    pub fn load(overrides: ConfigOverrides) -> Result<Config> {
        let mut builder = RConfig::builder();

        // set defaults
        builder = builder
            .set_default("url_base", KNOWN_SERVERS_URL_BASE)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("write_mode", "direct")?;

        // set overrides
        builder = builder
            .set_override_option("url_base", overrides.url_base)?
            .set_override_option("log_level", overrides.log_level)?
            .set_override_option(
                "write_mode",
                overrides.write_mode.map(|mode| match mode {
                    WriteMode::Direct => "direct",
                    WriteMode::Staged => "staged",
                }),
            )?;

        let mut config: Config = builder
            .build()?
            .try_deserialize()
            .context("failed to build configuration")?;

        config.target_path = match overrides.target_path {
            Some(path) => path,
            None => std::env::current_dir().context("failed to get current directory")?,
        };

        Ok(config)
    }
}
