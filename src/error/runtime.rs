//! The failure raised by an action run.
//!
//! The router never interprets these values; it only forwards them. The
//! [`RuntimeError::api_error`] check exists for dispatchers and logs that
//! want to show the backend's error code.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An opaque error produced by a failed action.
///
/// Usually an HTTP response wrapper, but any JSON value is accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeError(Value);

impl RuntimeError {
    /// Wraps an arbitrary value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the error and returns the wrapped value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Recognizes the backend's API error shape.
    ///
    /// Matches a response wrapper whose `data` object carries an
    /// `errorCode` (any type) and a string `errorMessage`.
    pub fn api_error(&self) -> Option<ApiError> {
        let data = self.0.get("data")?.as_object()?;
        let error_code = data.get("errorCode")?.clone();
        let error_message = data.get("errorMessage")?.as_str()?.to_string();
        Some(ApiError {
            error_code,
            error_message,
        })
    }
}

impl From<Value> for RuntimeError {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The error body returned by the builder's backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Numeric or symbolic error code
    pub error_code: Value,
    /// Human-readable message
    pub error_message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Value::String(code) => write!(f, "[{}] {}", code, self.error_message),
            code => write!(f, "[{}] {}", code, self.error_message),
        }
    }
}
