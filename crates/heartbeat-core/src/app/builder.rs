//! ReporterBuilder - 設定から MuxReporter を組み立てる
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）: ファイルが開けない・client が作れない場合は
//!   build() がエラーを返す。heartbeat 自体は失敗を返さない

use super::config::ReporterConfig;
use crate::domain::Command;
use crate::impls::{HttpReporter, MuxReporter, WriterReporter};
use crate::ports::Reporter;
use reqwest::{Client, ClientBuilder};
use std::path::PathBuf;
use std::time::Duration;

/// ReporterBuilder は有効な reporter を MuxReporter にまとめる
///
/// # 使用例
/// ```ignore
/// let reporter = ReporterBuilder::from_config(config)
///     .stdout(true)
///     .build()
///     .await?;
/// reporter.heartbeat(&Command::new("up", CommandStatus::Success)).await;
/// ```
///
/// # 配送順
/// stdout → file → http。ローカルの出力先を先に書き、
/// collector の遅延がそれらを待たせないようにする。
pub struct ReporterBuilder {
    config: ReporterConfig,
    client: Option<Client>,
}

/// BuildError は reporter 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to open usage log {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ReporterBuilder {
    pub fn new() -> Self {
        Self::from_config(ReporterConfig::default())
    }

    pub fn from_config(config: ReporterConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    pub fn stdout(mut self, enabled: bool) -> Self {
        self.config.stdout = enabled;
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file = Some(path.into());
        self
    }

    pub fn http(mut self, enabled: bool) -> Self {
        self.config.http = enabled;
        self
    }

    /// `Duration::ZERO` はタイムアウトなし。1ms 未満の値は 1ms に切り上げる
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = if timeout.is_zero() {
            0
        } else {
            timeout.as_millis().clamp(1, u64::MAX as u128) as u64
        };
        self
    }

    /// 構築済みの client を使う（timeout 設定は無視される）
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// client を注入しない場合に使う ClientBuilder
    fn client_builder(&self) -> ClientBuilder {
        let builder = Client::builder();
        match self.config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// 設定どおりの MuxReporter を構築
    ///
    /// 何も有効でなければ空の MuxReporter（heartbeat は何もしない）を返す。
    pub async fn build(self) -> Result<MuxReporter<Command>, BuildError> {
        let mut reporters: Vec<Box<dyn Reporter<Command>>> = Vec::new();

        if self.config.stdout {
            reporters.push(Box::new(WriterReporter::stdout()));
        }

        if let Some(path) = &self.config.file {
            let writer = WriterReporter::append_file(path)
                .await
                .map_err(|source| BuildError::OpenFile {
                    path: path.clone(),
                    source,
                })?;
            reporters.push(Box::new(writer));
        }

        if self.config.http {
            let client = match &self.client {
                Some(client) => client.clone(),
                None => self.client_builder().build()?,
            };
            reporters.push(Box::new(HttpReporter::new(client)));
        }

        tracing::debug!(
            reporters = reporters.len(),
            stdout = self.config.stdout,
            file = ?self.config.file,
            http = self.config.http,
            "built heartbeat reporter"
        );
        Ok(MuxReporter::new(reporters))
    }
}

impl Default for ReporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
