use std::fmt;
use std::path::PathBuf;

/// Malformed or unreadable window options. Fatal at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The options file could not be read.
    Io { path: PathBuf, message: String },
    /// The options document is not well-formed, has unknown keys, or lacks required ones.
    Parse(String),
    /// The options parsed but hold values the host cannot honour.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "cannot read window options {}: {message}", path.display())
            }
            Self::Parse(msg) => write!(f, "malformed window options: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid window options: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
