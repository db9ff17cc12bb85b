//! App - アプリケーション層
//!
//! 設定と ports/impls を組み合わせて、呼び出し側が使う reporter を組み立てます。
//!
//! # 主要コンポーネント
//! - **ReporterConfig**: 有効にする配送先（TOML から読み込み可能）
//! - **ReporterBuilder**: 設定から MuxReporter を構築

pub mod builder;
pub mod config;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, ReporterBuilder};
pub use self::config::{ConfigError, ReporterConfig};
