//! JMESPath extraction over JSON secrets.
//!
//! Decodes a raw secret as JSON, evaluates a query against it, and coerces
//! the result into the text placed in an environment variable.

use std::fmt;

use serde_json::Value;

/// Largest magnitude for which an integral float is printed as an integer.
const INTEGRAL_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Why a query produced no value.
#[derive(Debug)]
pub enum QueryFailure {
    /// The raw secret is not JSON.
    Decode(serde_json::Error),
    /// The expression did not compile or failed during evaluation.
    Expression(String),
    /// The expression evaluated to null or matched nothing.
    Null,
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "secret is not valid JSON: {}", e),
            Self::Expression(e) => write!(f, "query failed: {}", e),
            Self::Null => write!(f, "query matched nothing"),
        }
    }
}

/// A non-null query result, classified for string coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Bool(bool),
    Structured(Value),
}

impl QueryValue {
    /// Classify a JSON value. Returns `None` for null.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => Some(match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                // above i64::MAX; the JSON text is already an exact integer
                _ if n.is_u64() => Self::Structured(Value::Number(n)),
                (None, Some(f)) if f.fract() == 0.0 && f.abs() < INTEGRAL_LIMIT => {
                    Self::Integer(f as i64)
                }
                (None, Some(f)) => Self::Real(f),
                (None, None) => Self::Structured(Value::Number(n)),
            }),
            other => Some(Self::Structured(other)),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Real(r) => write!(f, "{:.6}", r),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Structured(v) => write!(f, "{}", v),
        }
    }
}

/// Evaluate `expression` against the JSON document in `raw`.
///
/// # Errors
///
/// Returns a `QueryFailure` when `raw` is not JSON, the expression is
/// invalid, or the result is null.
pub fn search(raw: &str, expression: &str) -> Result<QueryValue, QueryFailure> {
    let document: Value = serde_json::from_str(raw).map_err(QueryFailure::Decode)?;

    let compiled =
        jmespath::compile(expression).map_err(|e| QueryFailure::Expression(e.to_string()))?;
    let found = compiled
        .search(document)
        .map_err(|e| QueryFailure::Expression(e.to_string()))?;

    let value =
        serde_json::to_value(&*found).map_err(|e| QueryFailure::Expression(e.to_string()))?;
    QueryValue::from_json(value).ok_or(QueryFailure::Null)
}
