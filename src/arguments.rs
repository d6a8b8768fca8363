//! Tool argument bag.
//!
//! MCP hands tool arguments over as an arbitrary JSON object. The weather
//! tools only ever read strings and numbers, so other values are kept only
//! by kind and fail when a tool asks for them through a typed accessor.

use std::collections::BTreeMap;

use rmcp::model::JsonObject;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    String(String),
    Number(f64),
    /// A JSON value no tool reads, remembered by its kind.
    Unsupported(&'static str),
}

impl ArgumentValue {
    fn kind(&self) -> &'static str {
        match self {
            ArgumentValue::String(_) => "string",
            ArgumentValue::Number(_) => "number",
            ArgumentValue::Unsupported(kind) => kind,
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::String(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::String(value)
    }
}

impl From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        ArgumentValue::Number(value)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("missing required argument '{0}'")]
    Missing(String),

    #[error("argument '{key}' must be a {expected}, got {found}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Named arguments of a single tool invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(BTreeMap<String, ArgumentValue>);

impl ToolArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Narrows a JSON argument object to strings and numbers.
    pub fn from_json(object: JsonObject) -> Self {
        let arguments = object
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => ArgumentValue::String(s),
                    Value::Number(n) => n
                        .as_f64()
                        .map_or(ArgumentValue::Unsupported("non-finite number"), ArgumentValue::Number),
                    other => ArgumentValue::Unsupported(json_kind(&other)),
                };
                (key, value)
            })
            .collect();
        Self(arguments)
    }

    pub fn string(&self, key: &str) -> Result<&str, ArgumentError> {
        match self.require(key)? {
            ArgumentValue::String(s) => Ok(s),
            other => Err(ArgumentError::WrongType {
                key: key.to_string(),
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    pub fn number(&self, key: &str) -> Result<f64, ArgumentError> {
        match self.require(key)? {
            ArgumentValue::Number(n) => Ok(*n),
            other => Err(ArgumentError::WrongType {
                key: key.to_string(),
                expected: "number",
                found: other.kind(),
            }),
        }
    }

    fn require(&self, key: &str) -> Result<&ArgumentValue, ArgumentError> {
        self.0
            .get(key)
            .ok_or_else(|| ArgumentError::Missing(key.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
