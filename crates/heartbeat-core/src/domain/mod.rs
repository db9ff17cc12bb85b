//! Domain model (command record, delivery errors).

pub mod command;
pub mod errors;

pub use self::command::{Command, CommandStatus, UnknownStatus};
pub use self::errors::ReportError;
