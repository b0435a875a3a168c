//! Host input coercion
//!
//! Automation hosts hand over loosely typed values: a plain string, a number,
//! or a list whose first item is the real input. Everything is coerced to
//! text here, before any DOI or BibTeX handling sees it.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Input value as received from a host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HostInput {
    Text(String),
    Number(serde_json::Number),
    List(Vec<Value>),
    Other(Value),
}

/// Host input that cannot be turned into text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No input provided")]
    Missing,
    #[error("Input list is empty")]
    EmptyList,
    #[error("Unsupported input type: {0}")]
    Unsupported(&'static str),
}

impl HostInput {
    /// Interpret raw text from a host.
    ///
    /// Text that parses as JSON is taken as a JSON value (so `["10.1/x"]` is
    /// a list); anything else is plain text.
    pub fn from_host_text(text: &str) -> Self {
        serde_json::from_str(text.trim()).unwrap_or_else(|_| HostInput::Text(text.to_string()))
    }

    /// Coerce to text
    pub fn into_text(self) -> Result<String, InputError> {
        match self {
            HostInput::Text(text) => Ok(text),
            HostInput::Number(n) => Ok(n.to_string()),
            HostInput::List(items) => match items.into_iter().next() {
                Some(Value::String(text)) => Ok(text),
                Some(Value::Number(n)) => Ok(n.to_string()),
                Some(other) => Err(InputError::Unsupported(value_kind(&other))),
                None => Err(InputError::EmptyList),
            },
            HostInput::Other(Value::Null) => Err(InputError::Missing),
            HostInput::Other(other) => Err(InputError::Unsupported(value_kind(&other))),
        }
    }
}

impl From<&str> for HostInput {
    fn from(text: &str) -> Self {
        HostInput::Text(text.to_string())
    }
}

impl From<String> for HostInput {
    fn from(text: String) -> Self {
        HostInput::Text(text)
    }
}

impl From<Value> for HostInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => HostInput::Text(text),
            Value::Number(n) => HostInput::Number(n),
            Value::Array(items) => HostInput::List(items),
            other => HostInput::Other(other),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
