//! Heterogeneous calculator input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw input value, before normalization.
///
/// Numbers pass through unchanged, text is sanitized, booleans and missing
/// slots are coerced. `Unsupported` carries the name of a runtime type that
/// has no numeric meaning and fails normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Missing,
    Unsupported(String),
}

impl Argument {
    /// Build an argument from a decoded JSON value.
    ///
    /// Integers that fit `i64` stay integral, every other JSON number becomes a float.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) => Self::Unsupported("array".to_string()),
            Value::Object(_) => Self::Unsupported("object".to_string()),
        }
    }

    /// Decode a JSON array into an argument list.
    ///
    /// A scalar document is treated as a one-element list.
    pub fn list_from_json(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.iter().map(Self::from_json).collect(),
            other => vec![Self::from_json(other)],
        }
    }

    /// Short type name used in logs and error messages.
    pub fn kind(&self) -> &str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Missing => "missing",
            Self::Unsupported(kind) => kind,
        }
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Missing => write!(f, "0"),
            Self::Unsupported(kind) => write!(f, "<{kind}>"),
        }
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
