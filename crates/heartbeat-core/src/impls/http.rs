//! HttpReporter - ローカル collector に heartbeat を POST する reporter
//!
//! 送信先は固定（[`USAGE_ENDPOINT`]）。タイムアウトや proxy は
//! 注入される `reqwest::Client` 側で設定する。

use crate::domain::ReportError;
use crate::ports::Reporter;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

/// heartbeat の送信先
pub const USAGE_ENDPOINT: &str = "http://localhost/usage";

/// HttpReporter は record を JSON にして 1 回だけ POST する
///
/// # 振る舞い
/// - リトライしない（ネットワークエラー, タイムアウト, 非 2xx のいずれも）
/// - ステータスコードは見ない。body は接続を返すために読み捨てる
#[derive(Debug, Clone)]
pub struct HttpReporter {
    client: Client,
}

impl HttpReporter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn try_post<R: Serialize>(&self, record: &R) -> Result<(), ReportError> {
        let entry = serde_json::to_vec(record)?;

        let mut resp = self
            .client
            .post(USAGE_ENDPOINT)
            .header(CONTENT_TYPE, "application/json")
            .body(entry)
            .send()
            .await?;

        let status = resp.status();
        while resp.chunk().await?.is_some() {}
        if !status.is_success() {
            tracing::trace!(%status, "collector answered with non-success status");
        }
        Ok(())
    }
}

#[async_trait]
impl<R> Reporter<R> for HttpReporter
where
    R: Serialize + Sync,
{
    async fn heartbeat(&self, record: &R) {
        if let Err(err) = self.try_post(record).await {
            tracing::debug!(kind = err.kind(), error = %err, "dropped heartbeat (http)");
        }
    }
}
