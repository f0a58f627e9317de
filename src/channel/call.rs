use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named request delivered over a channel.
///
/// The arguments are an opaque payload owned by the caller; handlers that do
/// not need them must ignore them rather than reject the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The resolved outcome of a single method call.
///
/// `NotImplemented` is a routine answer for an unrecognized call name, not a
/// failure; `Error` means the call was recognized but the host query behind
/// it misbehaved. Callers can always tell the three apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallOutcome {
    Success { value: Value },
    NotImplemented,
    Error { code: String, message: String },
}

impl CallOutcome {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A handler bound to one channel.
///
/// Handlers resolve every call synchronously and must not hold state across
/// calls; concurrent dispatch needs no coordination beyond `Send + Sync`.
pub trait MethodCallHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> CallOutcome;
}
