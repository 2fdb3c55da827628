mod store;

use basic_strategy::PracticeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub use store::{FileStreakStore, StoreError};

pub const DEFAULT_STATE_FILE: &str = "~/.basic_strategy_state.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid practice mode: {0}")]
    PracticeMode(#[from] serde::de::value::Error),
    #[error("cannot find home directory")]
    NoHomeDirectory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub trainer: ConfigTrainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigTrainer {
    #[serde(default = "default_practice_mode")]
    pub practice_mode: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub state_file: Option<String>,
}

fn default_practice_mode() -> String {
    PracticeMode::default().to_string()
}

impl Default for ConfigTrainer {
    fn default() -> Self {
        ConfigTrainer {
            practice_mode: default_practice_mode(),
            seed: None,
            state_file: None,
        }
    }
}

/// Validated trainer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerSettings {
    pub practice_mode: PracticeMode,
    pub seed: Option<u64>,
    pub state_file: PathBuf,
}

impl TryFrom<ConfigTrainer> for TrainerSettings {
    type Error = ConfigError;

    fn try_from(config: ConfigTrainer) -> Result<Self, Self::Error> {
        let state_file = config
            .state_file
            .as_deref()
            .unwrap_or(DEFAULT_STATE_FILE);

        Ok(TrainerSettings {
            practice_mode: config.practice_mode.parse()?,
            seed: config.seed,
            state_file: expand_home(state_file)?,
        })
    }
}

/// Resolves a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home_dir = home::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
            Ok(home_dir.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &str) -> Result<Config, ConfigError> {
    let file_content = fs::read_to_string(filename).map_err(|source| ConfigError::Io {
        path: String::from(filename),
        source,
    })?;
    parse_config(&file_content)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}
