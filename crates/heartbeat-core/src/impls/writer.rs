//! WriterReporter - JSON Lines をストリームに書く reporter
//!
//! # 学習ポイント
//! - `&self` から `&mut W` を得るための tokio::sync::Mutex
//! - 失敗を `try_*` に閉じ込めて境界で捨てる

use crate::domain::ReportError;
use crate::ports::Reporter;
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// WriterReporter は record を 1 行の JSON として出力先に追記する
///
/// # 出力形式
/// ```text
/// {"command":"up","status":"success"}\n
/// ```
///
/// 書き込みエラーは捨てる（リトライしない）。
pub struct WriterReporter<W> {
    out: Mutex<W>,
}

impl<W> WriterReporter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// 出力先を取り出す
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn try_write<R: Serialize>(&self, record: &R) -> Result<(), ReportError> {
        let mut entry = serde_json::to_vec(record)?;
        entry.push(b'\n');

        let mut out = self.out.lock().await;
        out.write_all(&entry).await?;
        out.flush().await?;
        Ok(())
    }
}

impl WriterReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl WriterReporter<File> {
    /// ファイルを追記モードで開く（なければ作成）
    pub async fn append_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        Ok(Self::new(file))
    }
}

#[async_trait]
impl<R, W> Reporter<R> for WriterReporter<W>
where
    R: Serialize + Sync,
    W: AsyncWrite + Unpin + Send,
{
    async fn heartbeat(&self, record: &R) {
        if let Err(err) = self.try_write(record).await {
            tracing::debug!(kind = err.kind(), error = %err, "dropped heartbeat (writer)");
        }
    }
}
