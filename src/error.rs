use thiserror::Error;

/// Convenient result alias used throughout the crate
pub type Result<T> = std::result::Result<T, KubeCheckError>;

/// Top-level error type for the CLI
#[derive(Error, Debug)]
pub enum KubeCheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command execution error: {0}")]
    Exec(#[from] ExecError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading or interpreting configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("invalid version '{0}': expected MAJOR.MINOR with numeric components")]
    InvalidVersion(String),
}

/// Errors raised while invoking external commands
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("'{0}' not found in PATH")]
    ToolNotFound(String),

    #[error("'{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },
}
