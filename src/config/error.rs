use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration errors. Any of these stops startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {} could not be decoded (tried {})", .path.display(), .attempted.join(", "))]
    Decode {
        path: PathBuf,
        attempted: Vec<&'static str>,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("missing section [{0}]")]
    MissingSection(String),

    #[error("missing key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("invalid integer for {section}.{key}: '{value}'")]
    InvalidInteger {
        section: String,
        key: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid boolean for {section}.{key}: '{value}' (expected 1/0, yes/no, true/false, on/off)")]
    InvalidBoolean {
        section: String,
        key: String,
        value: String,
    },

    #[error("could not locate the program directory: {0}")]
    ProgramDir(#[source] std::io::Error),
}

/// A setting that was degraded to its safe value instead of failing startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("invalid proxy '{address}', expected a form like 'http://127.0.0.1:1080'; proxy disabled")]
    InvalidProxy { address: String },

    #[error("invalid proxy-free url for '{site}': '{url}'; entry disabled")]
    InvalidProxyFreeUrl { site: String, url: String },

    #[error("config file {} does not exist", .path.display())]
    MissingConfigFile { path: PathBuf },
}
