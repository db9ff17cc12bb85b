//! ReporterConfig - どの配送先を有効にするかの設定
//!
//! # TOML 例
//! ```toml
//! stdout = false
//! file = "/var/log/tool/usage.jsonl"
//! http = true
//! timeout_ms = 2000
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 2_000;

/// ReporterConfig は有効にする reporter の集合
///
/// 省略されたキーはデフォルト値になり、未知のキーはエラーにする。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReporterConfig {
    /// stdout に JSON Lines を書く
    pub stdout: bool,

    /// JSON Lines を追記するファイル
    pub file: Option<PathBuf>,

    /// ローカル collector に POST する
    pub http: bool,

    /// HTTP client のリクエストタイムアウト（ミリ秒）。0 はタイムアウトなし
    pub timeout_ms: u64,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            stdout: false,
            file: None,
            http: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// ConfigError は設定の読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ReporterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// `timeout_ms = 0` のときは `None`（タイムアウトなし）
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// 有効な配送先が 1 つもない
    pub fn is_disabled(&self) -> bool {
        !self.stdout && self.file.is_none() && !self.http
    }
}
