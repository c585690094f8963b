//! Channel envelope types
//!
//! A request is a method name plus an optional bag of named arguments; a
//! reply is either a success value or the distinct not-implemented marker.
//! Requests are constructed by the caller per invocation, consumed once,
//! and discarded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One inbound request on the platform channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Wire method name
    pub method: String,
    /// Named arguments; absent entirely for argument-less methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

impl MethodCall {
    /// Call with no arguments
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Attach one named argument
    pub fn with_argument(mut self, key: impl Into<String>, value: Value) -> Self {
        self.arguments
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Integer argument, or `None` when missing, null, or not an integer.
    ///
    /// Argument defects are never reported to the caller; every consumer
    /// substitutes a documented default instead.
    pub fn argument_i64(&self, key: &str) -> Option<i64> {
        self.arguments.as_ref()?.get(key)?.as_i64()
    }

    /// Boolean argument, or `None` when missing, null, or not a boolean
    pub fn argument_bool(&self, key: &str) -> Option<bool> {
        self.arguments.as_ref()?.get(key)?.as_bool()
    }
}

/// Outcome delivered back over the channel.
///
/// `NotImplemented` is a distinct reply variant rather than a transport
/// fault so the application layer can detect an unsupported method without
/// treating it as a runtime error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodReply {
    /// The command executed; `value` is a boolean, an integer, or null
    Success {
        #[serde(default)]
        value: Value,
    },
    /// The method name is not part of the channel contract
    NotImplemented,
}

impl MethodReply {
    /// Success carrying a value
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    /// Void success
    pub fn empty() -> Self {
        Self::Success { value: Value::Null }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }
}
