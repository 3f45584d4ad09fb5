// Validation and configuration errors

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A caller-supplied error that replaces the natural validation failure.
pub type SubstituteError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Runtime type tag of a candidate value, appended to failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl TypeTag {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => TypeTag::String,
            Value::Number(_) => TypeTag::Number,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Object(_) => TypeTag::Object,
            Value::Array(_) => TypeTag::Array,
            Value::Null => TypeTag::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Null => "null",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed per-call configuration. Always surfaced to the caller as-is,
/// never substituted or suppressed: it signals a bug in the calling code,
/// not an invalid input value.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("options.mode must be one of 'strict' or 'loose', got '{0}'")]
    InvalidPhoneMode(String),

    #[error("options.generation must be one of 'first' or 'second', got '{0}'")]
    InvalidIdGeneration(String),

    #[error("options.version must be one of 'ipv4' or 'ipv6', got '{0}'")]
    InvalidIpVersion(String),

    #[error("options.pattern is not a valid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("length limit must be zero or a positive integer, got {0}")]
    InvalidLimit(i64),

    #[error("the allowed set for an enum validator must not be empty")]
    EmptyEnumSet,
}

/// A value that did not satisfy its rule.
///
/// `message` is the decorated form: the underlying reason plus the runtime
/// type tag of the offending value. The value itself is retained so call
/// sites can inspect what was actually passed in.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ValidationFailure {
    /// Which constraint failed
    pub reason: String,

    /// Decorated message (reason + runtime type of the value)
    pub message: String,

    /// Runtime type of the offending value
    pub type_tag: TypeTag,

    /// The value that failed validation
    pub value: Value,
}

impl ValidationFailure {
    /// Build a failure for `value`, decorating `reason` with its type tag.
    pub fn new(reason: impl Into<String>, value: &Value) -> Self {
        let reason = reason.into();
        let type_tag = TypeTag::of(value);
        let message = format!(
            "{}, the type of the value passed in is [{}]",
            reason, type_tag
        );
        Self {
            reason,
            message,
            type_tag,
            value: value.clone(),
        }
    }

    /// Diagnostic JSON representation.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "reason": self.reason,
            "message": self.message,
            "type": self.type_tag.as_str(),
            "value": self.value,
        })
    }
}

/// Error type returned by every public validator.
#[derive(Error, Debug)]
pub enum Error {
    /// The options were malformed
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The value did not satisfy the rule
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The caller-supplied replacement error (`options.error`)
    #[error(transparent)]
    Substituted(SubstituteError),
}

impl Error {
    /// True when this is a validation failure (as opposed to a
    /// configuration error or a substituted error).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True when this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
