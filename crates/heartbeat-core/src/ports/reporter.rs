//! Reporter port - heartbeat 配送の抽象化
//!
//! # 実装
//! - **WriterReporter**: JSON Lines をストリームに書く
//! - **HttpReporter**: ローカル collector に POST
//! - **MuxReporter**: 複数の Reporter に順番に配る

use crate::domain::Command;
use async_trait::async_trait;
use std::sync::Arc;

/// Reporter は record を 1 件受け取り、配送を試みる
///
/// # 契約
/// - 失敗を呼び出し側に返さない（戻り値は `()`）
/// - record を変更・保持しない
///
/// # Object Safety
/// - `Box<dyn Reporter<R>>` として MuxReporter に格納できる
/// - `R` のデフォルトは [`Command`]
#[async_trait]
pub trait Reporter<R: Sync = Command>: Send + Sync {
    async fn heartbeat(&self, record: &R);
}

#[async_trait]
impl<R, T> Reporter<R> for Box<T>
where
    R: Sync,
    T: Reporter<R> + ?Sized,
{
    async fn heartbeat(&self, record: &R) {
        (**self).heartbeat(record).await
    }
}

#[async_trait]
impl<R, T> Reporter<R> for Arc<T>
where
    R: Sync,
    T: Reporter<R> + ?Sized,
{
    async fn heartbeat(&self, record: &R) {
        (**self).heartbeat(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommandStatus;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Reporter for Recording {
        async fn heartbeat(&self, record: &Command) {
            self.seen.lock().unwrap().push(record.command.clone());
        }
    }

    #[tokio::test]
    async fn shared_reporter_is_usable_through_arc_and_box() {
        let inner = Arc::new(Recording::default());
        let boxed: Box<dyn Reporter> = Box::new(inner.clone());

        let cmd = Command::new("ps", CommandStatus::Success);
        boxed.heartbeat(&cmd).await;
        inner.heartbeat(&cmd).await;

        assert_eq!(*inner.seen.lock().unwrap(), vec!["ps", "ps"]);
    }
}
