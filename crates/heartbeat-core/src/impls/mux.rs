//! MuxReporter - 複数の Reporter に順番に配る reporter
//!
//! # 学習ポイント
//! - `Vec<Box<dyn Reporter<R>>>` による type erasure
//! - 逐次 await（並行実行しない）

use crate::domain::Command;
use crate::ports::Reporter;
use async_trait::async_trait;

/// MuxReporter は保持する reporter 全員に同じ record を渡す
///
/// # 順序
/// - 構築時の順番どおりに 1 回ずつ呼ぶ
/// - 各メンバーは失敗を返さないので、途中で止まることはない
/// - 遅いメンバー（ハングした HTTP など）は後続と呼び出し側を待たせる
///
/// メンバーは構築後に変更できない。
pub struct MuxReporter<R: Sync = Command> {
    reporters: Vec<Box<dyn Reporter<R>>>,
}

impl<R: Sync> MuxReporter<R> {
    pub fn new(reporters: Vec<Box<dyn Reporter<R>>>) -> Self {
        Self { reporters }
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl<R: Sync> Default for MuxReporter<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Sync> FromIterator<Box<dyn Reporter<R>>> for MuxReporter<R> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reporter<R>>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl<R: Sync> Reporter<R> for MuxReporter<R> {
    async fn heartbeat(&self, record: &R) {
        for reporter in &self.reporters {
            reporter.heartbeat(record).await;
        }
    }
}
