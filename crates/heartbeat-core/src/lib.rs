//! heartbeat-core
//!
//! Best-effort usage telemetry ("heartbeat") reporters for command-line tools.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Command, CommandStatus, ReportError）
//! - **ports**: 抽象化レイヤー（Reporter）
//! - **impls**: 実装（WriterReporter, HttpReporter, MuxReporter）
//! - **app**: 設定と構築（ReporterConfig, ReporterBuilder）
//!
//! `Reporter::heartbeat` は失敗を返しません（シリアライズ・I/O の失敗は内部で捨てる）。

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;

pub use self::app::{BuildError, ConfigError, ReporterBuilder, ReporterConfig};
pub use self::domain::{Command, CommandStatus};
pub use self::impls::{HttpReporter, MuxReporter, USAGE_ENDPOINT, WriterReporter};
pub use self::ports::Reporter;
