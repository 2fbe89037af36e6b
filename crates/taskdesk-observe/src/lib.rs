//! Process-wide tracing bootstrap for taskdesk binaries.

mod config;
pub use config::{LoggerConfig, LoggerFormat};

mod error;
pub use error::LoggerError;

mod init;
pub use init::logger_init;
