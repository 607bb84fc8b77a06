//! Directive type.
//!
//! Parses one `NAME=VALUE` assignment and recognizes secret references of
//! the form `secretsmanager://SECRET[##QUERY]`.

use std::fmt;

use crate::core::constants::{QUERY_SEPARATOR, SECRET_PREFIX, VALUE_TRIM};
use crate::error::ParseError;

/// A parsed `NAME=VALUE` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    name: String,
    raw_value: String,
    secret_name: Option<String>,
    query_path: Option<String>,
}

impl Directive {
    /// Parse an assignment line.
    ///
    /// Splits on the first `=` only, so values may contain `=`. The value is
    /// trimmed of spaces, tabs and newlines; the name is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `MalformedAssignment` if the line has no `=`, and
    /// `UnsupportedNestedPath` if a reference contains more than one `##`.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let (name, value) = line
            .split_once('=')
            .ok_or(ParseError::MalformedAssignment)?;
        Self::from_pair(name, value)
    }

    /// Classify an already split name/value pair.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedNestedPath` if the reference contains more than one `##`.
    pub fn from_pair(name: &str, value: &str) -> Result<Self, ParseError> {
        let raw_value = value.trim_matches(VALUE_TRIM).to_string();

        let Some(reference) = raw_value.strip_prefix(SECRET_PREFIX) else {
            return Ok(Self {
                name: name.to_string(),
                raw_value,
                secret_name: None,
                query_path: None,
            });
        };

        let mut parts = reference.split(QUERY_SEPARATOR);
        let secret_name = parts.next().unwrap_or_default().to_string();
        let query_path = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(ParseError::UnsupportedNestedPath {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            raw_value,
            secret_name: Some(secret_name),
            query_path,
        })
    }

    /// Variable name (left of the first `=`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed right-hand side.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Referenced secret name, if the value is a secret reference.
    pub fn secret_name(&self) -> Option<&str> {
        self.secret_name.as_deref()
    }

    /// Query path following `##`, if any.
    pub fn query_path(&self) -> Option<&str> {
        self.query_path.as_deref()
    }

    /// Whether the value references a secret.
    pub fn is_secret(&self) -> bool {
        self.secret_name.is_some()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.secret_name, &self.query_path) {
            (Some(secret), Some(path)) => write!(f, "{} <- {} (path={})", self.name, secret, path),
            (Some(secret), None) => write!(f, "{} <- {}", self.name, secret),
            _ => write!(f, "{}", self.name),
        }
    }
}
