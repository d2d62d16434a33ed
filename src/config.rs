use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use serde::Deserialize;
use serde_with::{DurationMilliSeconds, DurationSeconds, serde_as};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to load {0}. error: {1}")]
    LoadFileError(PathBuf, io::ErrorKind),
    #[error(transparent)]
    TomlParseError(#[from] toml::de::Error),
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Settings {
    /// 監視対象ごとの送信間隔(ミリ秒)
    /// デフォルトは50ミリ秒
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "Settings::default_interval")]
    pub(crate) interval: Duration,

    /// 全監視対象を一巡した後の待機時間(秒)
    /// デフォルトは5秒
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "Settings::default_cycle_interval")]
    pub(crate) cycle_interval: Duration,

    /// TCP接続のタイムアウト(秒)
    /// デフォルトは5秒
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "Settings::default_timeout")]
    pub(crate) timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: Self::default_interval(),
            cycle_interval: Self::default_cycle_interval(),
            timeout: Self::default_timeout(),
        }
    }
}

impl Settings {
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFileError(path.to_path_buf(), e.kind()))?;
        toml::from_str(&content).map_err(ConfigError::TomlParseError)
    }

    const fn default_interval() -> Duration {
        Duration::from_millis(50)
    }

    const fn default_cycle_interval() -> Duration {
        Duration::from_secs(5)
    }

    const fn default_timeout() -> Duration {
        Duration::from_secs(5)
    }
}
