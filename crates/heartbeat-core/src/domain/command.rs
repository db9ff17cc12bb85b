//! Command record: one CLI invocation as reported by a heartbeat.
//!
//! Reporters never look inside this type; they only need it to be
//! `Serialize`. The shape is kept small so the canonical encoding stays
//! stable across releases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a command invocation ended.
///
/// Serialized lowercase: `success` / `failure` / `canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Success,
    Failure,
    Canceled,
}

impl CommandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandStatus::Success => "success",
            CommandStatus::Failure => "failure",
            CommandStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知のステータス文字列
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command status: {0:?} (expected success, failure or canceled)")]
pub struct UnknownStatus(pub String);

impl FromStr for CommandStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Ok(CommandStatus::Success),
            "failure" => Ok(CommandStatus::Failure),
            "canceled" => Ok(CommandStatus::Canceled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Command は 1 回のコマンド実行のテレメトリ payload
///
/// # JSON 形式
/// ```text
/// {"command":"up","context":"default","source":"cli","status":"success"}
/// ```
/// `context` / `source` は `None` のとき出力しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub status: CommandStatus,
}

impl Command {
    pub fn new(command: impl Into<String>, status: CommandStatus) -> Self {
        Self {
            command: command.into(),
            context: None,
            source: None,
            status,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
