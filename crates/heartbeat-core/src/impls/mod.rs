//! Impls - Reporter の実装
//!
//! # 含まれる実装
//! - **WriterReporter**: JSON Lines（ファイル, stdout, バッファ）
//! - **HttpReporter**: `http://localhost/usage` への POST
//! - **MuxReporter**: fan-out

pub mod http;
pub mod mux;
pub mod writer;

// 主要な型を再エクスポート
pub use self::http::{HttpReporter, USAGE_ENDPOINT};
pub use self::mux::MuxReporter;
pub use self::writer::WriterReporter;
