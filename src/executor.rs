// Rule evaluation and the uniform error-reporting policy

use crate::errors::{Error, ValidationFailure};
use crate::options::{IpVersion, Options};
use crate::patterns;
use crate::rules::{BaseType, Format, LengthBound, NumericKind, ValidationRule};
use serde_json::Value;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Evaluate `rule` against `value`.
///
/// Returns `Ok(true)` on success. On failure the underlying reason is
/// decorated with the runtime type of the value; if `options.error` is set,
/// the decorated diagnostic is logged (unless `clear(false)`) and the call
/// fails with the caller-supplied error instead of the natural one.
///
/// Values are never coerced: a numeric string is not a number here.
pub fn execute(rule: &ValidationRule, value: &Value, options: Options) -> Result<bool, Error> {
    let reason = match check(rule, value) {
        Ok(()) => return Ok(true),
        Err(reason) => reason,
    };

    let failure = ValidationFailure::new(reason, value);
    let should_log = options.should_log();
    match options.error {
        Some(substitute) => {
            if should_log {
                log::error!("{} (value: {})", failure.message, failure.value);
            }
            Err(Error::Substituted(substitute))
        }
        None => Err(Error::Validation(failure)),
    }
}

fn check(rule: &ValidationRule, value: &Value) -> Result<(), String> {
    if value.is_null() {
        return Err("value is required".to_string());
    }

    match rule.base {
        BaseType::String => {
            let text = value
                .as_str()
                .ok_or_else(|| "value must be a string".to_string())?;
            check_string(rule, text)
        }
        BaseType::Number => {
            if !value.is_number() {
                return Err("value must be a number".to_string());
            }
            check_number(rule, value)
        }
        BaseType::Boolean => {
            if !value.is_boolean() {
                return Err("value must be a boolean".to_string());
            }
            Ok(())
        }
        BaseType::Object => {
            let map = value
                .as_object()
                .ok_or_else(|| "value must be an object".to_string())?;
            if map.len() < rule.object_min_keys {
                return Err(format!(
                    "value must have at least {} key{}",
                    rule.object_min_keys,
                    if rule.object_min_keys == 1 { "" } else { "s" }
                ));
            }
            Ok(())
        }
    }
}

fn check_string(rule: &ValidationRule, text: &str) -> Result<(), String> {
    if text.is_empty() {
        if rule.allow_empty {
            return Ok(());
        }
        return Err("value is not allowed to be empty".to_string());
    }

    if rule.reject_surrounding_whitespace && text != text.trim() {
        return Err("value must not have leading or trailing whitespace".to_string());
    }

    if let Some(bound) = rule.length {
        let length = text.chars().count();
        match bound {
            LengthBound::Max(max) if length > max => {
                return Err(format!(
                    "value length must be less than or equal to {} characters",
                    max
                ));
            }
            LengthBound::Min(min) if length < min => {
                return Err(format!("value length must be at least {} characters", min));
            }
            _ => {}
        }
    }

    if let Some(allowed) = &rule.allowed {
        if !allowed.iter().any(|candidate| candidate == text) {
            return Err(format!("value must be one of [{}]", allowed.join(", ")));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(text) {
            return Err("value fails to match the required pattern".to_string());
        }
    }

    if let Some(format) = &rule.format {
        check_format(format, text)?;
    }

    Ok(())
}

fn check_format(format: &Format, text: &str) -> Result<(), String> {
    match format {
        Format::Email => {
            if !patterns::email_pattern().is_match(text) {
                return Err("value must be a valid email".to_string());
            }
        }
        Format::Url => {
            if !patterns::url_pattern().is_match(text) {
                return Err("value must be a valid url".to_string());
            }
        }
        Format::Ip(versions) => {
            let matched = versions.iter().any(|version| match version {
                IpVersion::V4 => text.parse::<Ipv4Addr>().is_ok(),
                IpVersion::V6 => text.parse::<Ipv6Addr>().is_ok(),
            });
            if !matched {
                let names: Vec<String> =
                    versions.iter().map(|version| version.to_string()).collect();
                return Err(format!(
                    "value must be a valid ip address of one of the following versions [{}]",
                    names.join(", ")
                ));
            }
        }
    }
    Ok(())
}

fn check_number(rule: &ValidationRule, value: &Value) -> Result<(), String> {
    if rule.numeric == NumericKind::Integer {
        let is_integer = value.as_i64().is_some()
            || value.as_u64().is_some()
            || value.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0);
        if !is_integer {
            return Err("value must be an integer".to_string());
        }
    }
    Ok(())
}
