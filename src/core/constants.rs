//! Constants used throughout aws-env.
//!
//! Centralizes the reference syntax and environment variable names.

/// Scheme prefix marking a value as a secret reference.
pub const SECRET_PREFIX: &str = "secretsmanager://";

/// Separator between the secret name and its query path.
pub const QUERY_SEPARATOR: &str = "##";

/// Characters trimmed from the right-hand side of an assignment.
pub const VALUE_TRIM: &[char] = &[' ', '\t', '\n'];

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "AWS_ENV_LOG";

/// Environment variable selecting the log format (`json` or plain).
pub const LOG_FORMAT_ENV: &str = "AWS_ENV_LOG_FORMAT";

/// Executable used by the CLI store backend.
pub const AWS_CLI: &str = "aws";
