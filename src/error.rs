use std::path::PathBuf;

/// Errors raised by the search agents themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no moves available: the state is exhausted")]
    ExhaustedState,

    #[error("invalid depth limit {0}: must be >= 0")]
    InvalidDepth(i64),
}

/// Errors that can occur while an agent chooses a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a legal move was entered")]
    InputClosed,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
