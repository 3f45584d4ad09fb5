//! Integration tests for minivalid

use minivalid::*;
use serde_json::{json, Value};

#[test]
fn test_required_not_empty_vs_could_empty() {
    assert!(required_not_empty(&json!("hello"), None).unwrap());
    assert!(required_not_empty(&json!(""), None).is_err());
    assert!(required_could_empty(&json!(""), None).unwrap());
    assert!(required_could_empty(&Value::Null, None).is_err());
}

#[test]
fn test_phone_modes() {
    assert!(required_phone(&json!("19119255642"), None).unwrap());
    assert!(required_phone(&json!("12000000000"), None).is_err());

    // Strict mode accepts country prefixes and only published segments.
    assert!(
        required_phone(
            &json!("008618311006933"),
            Some(Options::new().mode(PhoneMode::Strict))
        )
        .unwrap()
    );
    assert!(
        required_phone(
            &json!("12000000000"),
            Some(Options::new().mode(PhoneMode::Strict))
        )
        .is_err()
    );

    // Loose mode takes any 1[3-9] prefix.
    assert!(
        required_phone(
            &json!("19219255642"),
            Some(Options::new().mode(PhoneMode::Loose))
        )
        .unwrap()
    );
}

#[test]
fn test_phone_custom_pattern_wins_over_mode() {
    let options = Options::new().pattern(r"^\d{4}$").mode(PhoneMode::Strict);
    assert!(required_phone(&json!("1234"), Some(options)).unwrap());

    let options = Options::new().pattern(r"^\d{4}$").mode(PhoneMode::Strict);
    assert!(required_phone(&json!("19119255642"), Some(options)).is_err());
}

#[test]
fn test_id_generations() {
    assert!(required_id(&json!("123456991010193"), None).unwrap());
    assert!(
        required_id(
            &json!("123456991010193"),
            Some(Options::new().generation(IdGeneration::First))
        )
        .unwrap()
    );
    assert!(
        required_id(
            &json!("123456991010193"),
            Some(Options::new().generation(IdGeneration::Second))
        )
        .is_err()
    );
    assert!(
        required_id(
            &json!("12345619991205131x"),
            Some(Options::new().generation(IdGeneration::Second))
        )
        .unwrap()
    );
}

#[test]
fn test_ip_versions() {
    assert!(required_ip(&json!("300.1.1.1"), None).is_err());
    assert!(
        required_ip(
            &json!("300.1.1.1"),
            Some(Options::new().version(IpVersion::V4))
        )
        .is_err()
    );

    assert!(required_ip(&json!("::1"), None).unwrap());
    assert!(required_ip(&json!("::1"), Some(Options::new().version(IpVersion::V6))).unwrap());
    assert!(required_ip(&json!("::1"), Some(Options::new().version(IpVersion::V4))).is_err());
}

#[test]
fn test_email_and_url() {
    assert!(required_email(&json!("user@example.com"), None).unwrap());
    assert!(required_email(&json!("invalid"), None).is_err());

    assert!(required_url(&json!("https://example.com/path"), None).unwrap());
    assert!(required_url(&json!("not a url"), None).is_err());

    // A custom pattern fully replaces the built-in format check.
    let options = Options::new().pattern(r"^ftp://.+$");
    assert!(required_url(&json!("ftp://files.example.com"), Some(options)).unwrap());
}

#[test]
fn test_length_bounds() {
    assert!(max(&json!("hi"), 3, None).unwrap());
    assert!(max(&json!("hello"), 3, None).is_err());

    // Zero is a legal limit, not an absent one.
    assert!(max(&json!("x"), 0, None).is_err());
    assert!(max(&json!(""), 0, None).is_err()); // empty string still fails required-not-empty

    assert!(min(&json!("hello"), 3, None).unwrap());
    assert!(min(&json!("hi"), 3, None).is_err());

    let result = max(&json!("x"), -1, None);
    assert!(matches!(
        result,
        Err(Error::Configuration(ConfigurationError::InvalidLimit(-1)))
    ));
}

#[test]
fn test_strictness_no_coercion() {
    assert!(required_number(&json!("5"), None).is_err());
    assert!(required_bool(&json!("true"), None).is_err());
    assert!(required_int(&json!(1.5), None).is_err());
    assert!(required_not_empty(&json!(5), None).is_err());
}

#[test]
fn test_decorated_failure_carries_type_and_value() {
    match required_number(&json!("5"), None) {
        Err(Error::Validation(failure)) => {
            assert_eq!(failure.type_tag, TypeTag::String);
            assert!(failure.message.contains("[string]"));
            assert_eq!(failure.value, json!("5"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_invalid_pattern_is_configuration_error() {
    // Raised before the value is inspected, even for a valid value.
    let options = Options::new().pattern("(unclosed");
    let result = required_phone(&json!("19119255642"), Some(options));
    assert!(matches!(
        result,
        Err(Error::Configuration(ConfigurationError::InvalidPattern(_)))
    ));
}

#[test]
fn test_configuration_error_is_never_substituted() {
    #[derive(Debug, thiserror::Error)]
    #[error("replacement")]
    struct Replacement;

    let options = Options::new().pattern("(unclosed").error(Replacement);
    let result = required_phone(&json!("19119255642"), Some(options));
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_error_substitution_returns_the_callers_error() {
    #[derive(Debug, thiserror::Error)]
    #[error("custom failure")]
    struct CustomFailure;

    let options = Options::new().error(CustomFailure).clear(false);
    match required_bool(&json!("yes"), Some(options)) {
        Err(Error::Substituted(err)) => {
            assert!(err.downcast_ref::<CustomFailure>().is_some());
            assert_eq!(err.to_string(), "custom failure");
        }
        other => panic!("expected substituted error, got {:?}", other),
    }
}

#[test]
fn test_required_enum_set() {
    assert!(required_enum(&json!("green"), &["red", "green", "blue"], None).unwrap());
    assert!(required_enum(&json!("cyan"), &["red", "green", "blue"], None).is_err());
    assert!(matches!(
        required_enum(&json!("red"), &[], None),
        Err(Error::Configuration(ConfigurationError::EmptyEnumSet))
    ));
}

#[test]
fn test_concurrent_calls_are_independent() {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(std::thread::spawn(|| {
            let mut outcomes = Vec::with_capacity(250);
            for _ in 0..125 {
                outcomes.push(required_phone(&json!("19119255642"), None).is_ok());
                outcomes.push(
                    required_phone(
                        &json!("12000000000"),
                        Some(Options::new().mode(PhoneMode::Strict)),
                    )
                    .is_ok(),
                );
            }
            outcomes
        }));
    }
    for handle in handles {
        let outcomes = handle.join().unwrap();
        for pair in outcomes.chunks(2) {
            assert_eq!(pair, [true, false]);
        }
    }
}
