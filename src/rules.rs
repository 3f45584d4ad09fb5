// Rule catalog: one construction policy per validator family

use crate::errors::ConfigurationError;
use crate::options::{IpVersion, Options};
use crate::patterns;
use regex::Regex;

/// Base type a value must have before any other constraint is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    String,
    Number,
    Boolean,
    Object,
}

/// Plain number vs integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Any,
    Integer,
}

/// Length bound for bounded-string rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Max(usize),
    Min(usize),
}

/// Built-in format check for families without a fixed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Email,
    Url,
    Ip(Vec<IpVersion>),
}

/// Immutable description of what a value must satisfy to pass.
///
/// Built once per call from the resolved options and handed to the
/// executor; never mutated after construction.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub(crate) base: BaseType,
    /// Reject leading/trailing whitespace (string rules only). Values are
    /// never trimmed for the caller; untrimmed input is a failure.
    pub(crate) reject_surrounding_whitespace: bool,
    /// Whether an empty string passes (string rules only)
    pub(crate) allow_empty: bool,
    pub(crate) pattern: Option<Regex>,
    pub(crate) length: Option<LengthBound>,
    pub(crate) numeric: NumericKind,
    pub(crate) object_min_keys: usize,
    pub(crate) format: Option<Format>,
    /// Fixed allowed set for the string-enum validator
    pub(crate) allowed: Option<Vec<String>>,
}

impl ValidationRule {
    fn string_base() -> Self {
        Self {
            base: BaseType::String,
            reject_surrounding_whitespace: true,
            allow_empty: false,
            pattern: None,
            length: None,
            numeric: NumericKind::Any,
            object_min_keys: 0,
            format: None,
            allowed: None,
        }
    }

    /// Required non-empty string.
    pub fn not_empty() -> Self {
        Self::string_base()
    }

    /// Required string, empty allowed.
    pub fn could_empty() -> Self {
        Self {
            allow_empty: true,
            ..Self::string_base()
        }
    }

    /// Required non-empty string with a maximum length. `0` is a legal
    /// limit; a negative limit is a configuration error.
    pub fn max_length(limit: i64) -> Result<Self, ConfigurationError> {
        if limit < 0 {
            return Err(ConfigurationError::InvalidLimit(limit));
        }
        Ok(Self {
            length: Some(LengthBound::Max(limit as usize)),
            ..Self::string_base()
        })
    }

    /// Required non-empty string with a minimum length.
    pub fn min_length(limit: i64) -> Result<Self, ConfigurationError> {
        if limit < 0 {
            return Err(ConfigurationError::InvalidLimit(limit));
        }
        Ok(Self {
            length: Some(LengthBound::Min(limit as usize)),
            ..Self::string_base()
        })
    }

    /// Required string from a fixed allowed set.
    pub fn enum_of(allowed: &[&str]) -> Result<Self, ConfigurationError> {
        if allowed.is_empty() {
            return Err(ConfigurationError::EmptyEnumSet);
        }
        Ok(Self {
            allowed: Some(allowed.iter().map(|s| s.to_string()).collect()),
            ..Self::string_base()
        })
    }

    /// Required phone number. A custom pattern takes precedence over the
    /// mode; otherwise the pattern follows `options.mode`.
    pub fn phone(options: &Options) -> Result<Self, ConfigurationError> {
        let pattern = match &options.pattern {
            Some(source) => patterns::check_custom_pattern(source)?,
            None => patterns::phone_pattern(options.mode).clone(),
        };
        Ok(Self {
            pattern: Some(pattern),
            ..Self::string_base()
        })
    }

    /// Required national ID. Same precedence as `phone`, with
    /// `options.generation` selecting the built-in pattern.
    pub fn national_id(options: &Options) -> Result<Self, ConfigurationError> {
        let pattern = match &options.pattern {
            Some(source) => patterns::check_custom_pattern(source)?,
            None => patterns::id_pattern(options.generation).clone(),
        };
        Ok(Self {
            pattern: Some(pattern),
            ..Self::string_base()
        })
    }

    /// Required email address. A custom pattern fully replaces the built-in
    /// format check.
    pub fn email(options: &Options) -> Result<Self, ConfigurationError> {
        match &options.pattern {
            Some(source) => Ok(Self {
                pattern: Some(patterns::check_custom_pattern(source)?),
                ..Self::string_base()
            }),
            None => Ok(Self {
                format: Some(Format::Email),
                ..Self::string_base()
            }),
        }
    }

    /// Required URL. A custom pattern fully replaces the built-in format
    /// check.
    pub fn url(options: &Options) -> Result<Self, ConfigurationError> {
        match &options.pattern {
            Some(source) => Ok(Self {
                pattern: Some(patterns::check_custom_pattern(source)?),
                ..Self::string_base()
            }),
            None => Ok(Self {
                format: Some(Format::Url),
                ..Self::string_base()
            }),
        }
    }

    /// Required IP address; both versions accepted by default, narrowed
    /// when `options.version` is set. No custom-pattern override here.
    pub fn ip(options: &Options) -> Self {
        let versions = match options.version {
            Some(version) => vec![version],
            None => vec![IpVersion::V4, IpVersion::V6],
        };
        Self {
            format: Some(Format::Ip(versions)),
            ..Self::string_base()
        }
    }

    /// Required number.
    pub fn number() -> Self {
        Self {
            base: BaseType::Number,
            reject_surrounding_whitespace: false,
            ..Self::string_base()
        }
    }

    /// Required integer.
    pub fn integer() -> Self {
        Self {
            numeric: NumericKind::Integer,
            ..Self::number()
        }
    }

    /// Required boolean.
    pub fn boolean() -> Self {
        Self {
            base: BaseType::Boolean,
            reject_surrounding_whitespace: false,
            ..Self::string_base()
        }
    }

    /// Required object with at least one key.
    pub fn not_empty_object() -> Self {
        Self {
            base: BaseType::Object,
            reject_surrounding_whitespace: false,
            object_min_keys: 1,
            ..Self::string_base()
        }
    }

    /// Required object, empty allowed.
    pub fn could_empty_object() -> Self {
        Self {
            object_min_keys: 0,
            ..Self::not_empty_object()
        }
    }
}
