// Public validators: thin dispatch onto the rule catalog and executor

use crate::errors::Error;
use crate::executor::execute;
use crate::options::{resolve, Options};
use crate::rules::ValidationRule;
use serde_json::Value;

/// Required non-empty string.
pub fn required_not_empty(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::not_empty(), value, options)
}

/// Required string; the empty string is allowed.
pub fn required_could_empty(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::could_empty(), value, options)
}

/// Required string drawn from a fixed allowed set.
pub fn required_enum(
    value: &Value,
    allowed: &[&str],
    options: Option<Options>,
) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::enum_of(allowed)?;
    execute(&rule, value, options)
}

/// Required string of at most `limit` characters. `0` is a legal limit.
pub fn max(value: &Value, limit: i64, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::max_length(limit)?;
    execute(&rule, value, options)
}

/// Required string of at least `limit` characters.
pub fn min(value: &Value, limit: i64, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::min_length(limit)?;
    execute(&rule, value, options)
}

/// Required mobile phone number.
///
/// With no options the plain pattern applies. `Options::mode` selects the
/// strict or loose pattern; `Options::pattern` overrides both.
pub fn required_phone(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::phone(&options)?;
    execute(&rule, value, options)
}

/// Required email address. `Options::pattern` replaces the built-in format
/// check entirely.
pub fn required_email(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::email(&options)?;
    execute(&rule, value, options)
}

/// Required national ID number, either generation by default.
/// `Options::generation` narrows to one; `Options::pattern` overrides both.
pub fn required_id(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::national_id(&options)?;
    execute(&rule, value, options)
}

/// Required IP address, v4 or v6 by default. `Options::version` narrows to
/// a single version.
pub fn required_ip(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::ip(&options);
    execute(&rule, value, options)
}

/// Required URL. `Options::pattern` replaces the built-in format check
/// entirely.
pub fn required_url(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    let rule = ValidationRule::url(&options)?;
    execute(&rule, value, options)
}

/// Required number. A numeric string is not a number.
pub fn required_number(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::number(), value, options)
}

/// Required integer number.
pub fn required_int(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::integer(), value, options)
}

/// Required boolean.
pub fn required_bool(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::boolean(), value, options)
}

/// Required object with at least one key.
pub fn required_not_empty_obj(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::not_empty_object(), value, options)
}

/// Required object; the empty object is allowed.
pub fn required_could_empty_obj(value: &Value, options: Option<Options>) -> Result<bool, Error> {
    let options = resolve(options);
    execute(&ValidationRule::could_empty_object(), value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_not_empty() {
        assert!(required_not_empty(&json!("hello"), None).unwrap());
        assert!(required_not_empty(&json!(""), None).is_err());
        assert!(required_not_empty(&json!(42), None).is_err());
    }

    #[test]
    fn test_required_could_empty() {
        assert!(required_could_empty(&json!(""), None).unwrap());
        assert!(required_could_empty(&json!("hello"), None).unwrap());
        assert!(required_could_empty(&Value::Null, None).is_err());
    }

    #[test]
    fn test_required_enum() {
        assert!(required_enum(&json!("red"), &["red", "green"], None).unwrap());
        assert!(required_enum(&json!("blue"), &["red", "green"], None).is_err());
    }

    #[test]
    fn test_max_and_min() {
        assert!(max(&json!("hi"), 3, None).unwrap());
        assert!(max(&json!("hello"), 3, None).is_err());
        assert!(max(&json!("x"), 0, None).is_err());
        assert!(min(&json!("hello"), 3, None).unwrap());
        assert!(min(&json!("hi"), 3, None).is_err());
    }

    #[test]
    fn test_required_number_and_int() {
        assert!(required_number(&json!(1.5), None).unwrap());
        assert!(required_number(&json!("5"), None).is_err());
        assert!(required_int(&json!(5), None).unwrap());
        assert!(required_int(&json!(1.5), None).is_err());
    }

    #[test]
    fn test_required_bool() {
        assert!(required_bool(&json!(false), None).unwrap());
        assert!(required_bool(&json!("true"), None).is_err());
    }

    #[test]
    fn test_objects() {
        assert!(required_not_empty_obj(&json!({"k": 1}), None).unwrap());
        assert!(required_not_empty_obj(&json!({}), None).is_err());
        assert!(required_could_empty_obj(&json!({}), None).unwrap());
        assert!(required_could_empty_obj(&json!([1]), None).is_err());
    }
}
