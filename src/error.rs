use thiserror::Error;

/// Errors raised while parsing a `NAME=VALUE` assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed assignment: expected NAME=VALUE")]
    MalformedAssignment,

    #[error("unsupported nested path in {name}: only one '##' query separator is allowed")]
    UnsupportedNestedPath { name: String },
}

/// Errors raised by a secret store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("failed to fetch secret {name}: {message}")]
    Failed { name: String, message: String },

    #[error("store backend unavailable: {0}")]
    Unavailable(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("secret {secret} (path={}) not found", .path.as_deref().unwrap_or(""))]
    SecretNotFound {
        secret: String,
        path: Option<String>,
    },

    #[error("{0}")]
    Usage(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
