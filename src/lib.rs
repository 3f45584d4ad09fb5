//! Miniature value validation
//!
//! A catalog of named validators over dynamically-typed values
//! (`serde_json::Value`), each built from an immutable rule and run through
//! one uniform execution path. On failure the error message is decorated
//! with the runtime type of the rejected value, so malformed call sites are
//! easy to spot from logs.
//!
//! Values are never coerced: a numeric string fails `required_number`, a
//! string `"true"` fails `required_bool`.
//!
//! # Examples
//!
//! ## Basic validation
//!
//! ```
//! use minivalid::{required_not_empty, required_number, Error};
//! use serde_json::json;
//!
//! assert!(required_not_empty(&json!("hello"), None).unwrap());
//!
//! match required_number(&json!("5"), None) {
//!     Err(Error::Validation(failure)) => {
//!         assert!(failure.message.contains("[string]"));
//!     }
//!     other => panic!("expected a validation failure, got {:?}", other),
//! }
//! ```
//!
//! ## Configured validators
//!
//! ```
//! use minivalid::{required_phone, required_ip, Options, PhoneMode, IpVersion};
//! use serde_json::json;
//!
//! // Strict mode only accepts the published mobile segment prefixes.
//! required_phone(&json!("19119255642"), Some(Options::new().mode(PhoneMode::Strict))).unwrap();
//!
//! // Narrow the IP validator to one version.
//! required_ip(&json!("::1"), Some(Options::new().version(IpVersion::V6))).unwrap();
//! assert!(required_ip(&json!("::1"), Some(Options::new().version(IpVersion::V4))).is_err());
//! ```
//!
//! ## Error substitution
//!
//! ```
//! use minivalid::{required_bool, Error, Options};
//! use serde_json::json;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("flag missing")]
//! struct FlagMissing;
//!
//! // The natural diagnostic is logged, then the caller's error is returned.
//! let result = required_bool(&json!("yes"), Some(Options::new().error(FlagMissing)));
//! assert!(matches!(result, Err(Error::Substituted(_))));
//! ```

mod errors;
mod executor;
mod options;
mod patterns;
mod rules;
mod validators;

pub use errors::{ConfigurationError, Error, SubstituteError, TypeTag, ValidationFailure};
pub use executor::execute;
pub use options::{IdGeneration, IpVersion, Options, PhoneMode};
pub use rules::{BaseType, Format, LengthBound, NumericKind, ValidationRule};
pub use validators::*;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_exports() {
        // Ensure module compiles
    }
}
