//! Logging utilities.
//!
//! Centralizes logger initialization. Code everywhere else logs through the
//! standard `log` facade and stays backend-agnostic.

mod init;

pub use init::{init_logging, LoggingConfig};
