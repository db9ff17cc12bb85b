//! Ports - 抽象化レイヤー
//!
//! heartbeat の配送先（HTTP collector, ログファイル, stdout など）を
//! `Reporter` trait 1 つで抽象化します。呼び出し側はどの配送先でも、
//! その組み合わせでも、同じように扱えます。

pub mod reporter;

pub use self::reporter::Reporter;
