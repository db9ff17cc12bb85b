//! Errors - 配送失敗の分類
//!
//! `ReportError` は reporter の内部でのみ使います。
//! `Reporter::heartbeat` は失敗を呼び出し側に返さないので、
//! ここで分類した失敗は各 reporter の境界で trace に落として捨てます。

use thiserror::Error;

/// ReportError は 1 回の heartbeat 配送で起きた失敗
///
/// # 分類
/// - Serialize: record を JSON にできない
/// - Transport: HTTP リクエストの送信・応答の読み出しに失敗
/// - Write: 出力先への書き込みに失敗
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("write: {0}")]
    Write(#[from] std::io::Error),
}

impl ReportError {
    /// trace の `kind` フィールド用
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::Serialize(_) => "serialize",
            ReportError::Transport(_) => "transport",
            ReportError::Write(_) => "write",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_to_write() {
        let err: ReportError = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), "write");
        assert_eq!(err.to_string(), "write: disk full");
    }

    #[test]
    fn json_error_converts_to_serialize() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ReportError = json_err.into();
        assert_eq!(err.kind(), "serialize");
        assert!(err.to_string().starts_with("serialize record: "));
    }
}
