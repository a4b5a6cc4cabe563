use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::{ParseLevelError, SetLoggerError};
use crate::manager_yr::errors::YrError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<YrError> for UnrecoverableError {
    fn from(e: YrError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while loading configuration or setting up logging
///
#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, reason: String },
    Parse(String),
    Invalid(String),
    Logger(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, reason } => write!(f, "ConfigError::Read: {}: {}", path, reason),
            ConfigError::Parse(e) => write!(f, "ConfigError::Parse: {}", e),
            ConfigError::Invalid(e) => write!(f, "ConfigError::Invalid: {}", e),
            ConfigError::Logger(e) => write!(f, "ConfigError::Logger: {}", e),
        }
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError::Parse(e.to_string()) }
}
impl From<ParseLevelError> for ConfigError {
    fn from(e: ParseLevelError) -> Self { ConfigError::Invalid(format!("log level: {}", e)) }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError::Logger(e.to_string()) }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self { ConfigError::Logger(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self { ConfigError::Logger(e.to_string()) }
}
