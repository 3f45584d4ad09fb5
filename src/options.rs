// Per-call options and their resolution

use crate::errors::{ConfigurationError, SubstituteError};
use std::fmt;
use std::str::FromStr;

/// Phone matching mode.
///
/// `Strict` restricts to the officially published mobile segment prefixes;
/// `Loose` accepts any `1[3-9]` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneMode {
    Strict,
    Loose,
}

impl FromStr for PhoneMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(PhoneMode::Strict),
            "loose" => Ok(PhoneMode::Loose),
            other => Err(ConfigurationError::InvalidPhoneMode(other.to_string())),
        }
    }
}

/// IP address version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    V4,
    V6,
}

impl FromStr for IpVersion {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipv4" => Ok(IpVersion::V4),
            "ipv6" => Ok(IpVersion::V6),
            other => Err(ConfigurationError::InvalidIpVersion(other.to_string())),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("ipv4"),
            IpVersion::V6 => f.write_str("ipv6"),
        }
    }
}

/// National-ID generation: `First` is the legacy 15-digit format, `Second`
/// the current 18-digit format with a trailing check character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGeneration {
    First,
    Second,
}

impl FromStr for IdGeneration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(IdGeneration::First),
            "second" => Ok(IdGeneration::Second),
            other => Err(ConfigurationError::InvalidIdGeneration(other.to_string())),
        }
    }
}

/// Per-call validator options.
///
/// Built once per call and consumed by the validator; never retained.
/// Options irrelevant to the validator being called are silently ignored
/// (`mode` has no effect on the email validator). A custom `pattern`, when
/// set, always takes precedence over `mode` / `generation` for that call.
///
/// # Examples
///
/// ```
/// use minivalid::{required_phone, Options, PhoneMode};
/// use serde_json::json;
///
/// required_phone(&json!("19119255642"), None).unwrap();
/// required_phone(
///     &json!("008618311006933"),
///     Some(Options::new().mode(PhoneMode::Strict)),
/// )
/// .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Options {
    pub(crate) clear: Option<bool>,
    pub(crate) error: Option<SubstituteError>,
    pub(crate) pattern: Option<String>,
    pub(crate) mode: Option<PhoneMode>,
    pub(crate) version: Option<IpVersion>,
    pub(crate) generation: Option<IdGeneration>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to log the natural diagnostic before failing with a
    /// substituted error. Defaults to `true` when unset.
    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = Some(clear);
        self
    }

    /// Error to fail with instead of the natural validation failure. The
    /// natural diagnostic is still logged unless `clear(false)` is set.
    pub fn error<E>(mut self, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.error = Some(Box::new(error));
        self
    }

    /// Custom pattern source, overriding the family default. Takes
    /// precedence over `mode` and `generation`.
    pub fn pattern(mut self, source: impl Into<String>) -> Self {
        self.pattern = Some(source.into());
        self
    }

    /// Phone matching mode (phone validator only).
    pub fn mode(mut self, mode: PhoneMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// IP version to narrow to (IP validator only).
    pub fn version(mut self, version: IpVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// National-ID generation (ID validator only).
    pub fn generation(mut self, generation: IdGeneration) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Whether the natural diagnostic should be logged before an error
    /// substitution. Absent means yes.
    pub(crate) fn should_log(&self) -> bool {
        self.clear.unwrap_or(true)
    }
}

/// Resolve the optional options argument: absent options behave exactly
/// like empty options.
pub(crate) fn resolve(options: Option<Options>) -> Options {
    options.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("strict".parse::<PhoneMode>().unwrap(), PhoneMode::Strict);
        assert_eq!("loose".parse::<PhoneMode>().unwrap(), PhoneMode::Loose);
        assert!(matches!(
            "medium".parse::<PhoneMode>(),
            Err(ConfigurationError::InvalidPhoneMode(_))
        ));
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("ipv4".parse::<IpVersion>().unwrap(), IpVersion::V4);
        assert!(matches!(
            "ipv5".parse::<IpVersion>(),
            Err(ConfigurationError::InvalidIpVersion(_))
        ));
    }

    #[test]
    fn test_generation_from_str() {
        assert_eq!("first".parse::<IdGeneration>().unwrap(), IdGeneration::First);
        assert!(matches!(
            "third".parse::<IdGeneration>(),
            Err(ConfigurationError::InvalidIdGeneration(_))
        ));
    }

    #[test]
    fn test_resolve_defaults() {
        let options = resolve(None);
        assert!(options.should_log());
        assert!(options.error.is_none());
        assert!(options.pattern.is_none());
    }

    #[test]
    fn test_clear_gate() {
        assert!(Options::new().should_log());
        assert!(Options::new().clear(true).should_log());
        assert!(!Options::new().clear(false).should_log());
    }
}
