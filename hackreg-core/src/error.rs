//! Structured error types for hackreg-core.
//!
//! Uses `thiserror` so the server crate can compose these errors;
//! the binary wraps them with `anyhow` context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A setting is well-formed TOML but unusable
    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// An environment override holds a value of the wrong shape
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },

    /// Config could not be rendered back to TOML
    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create a read error for a path
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a path
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create an unusable setting error
    pub fn invalid_setting(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key,
            reason: reason.into(),
        }
    }

    /// Create an invalid environment override error
    pub fn invalid_env(var: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEnv {
            var,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid_env("HACKREG_BIND", "not a socket address");
        assert_eq!(
            err.to_string(),
            "Invalid value for HACKREG_BIND: not a socket address"
        );

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::read("/tmp/config.toml", io_err);
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.to_string().contains("denied"));
    }
}
