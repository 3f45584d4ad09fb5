// Fixed pattern table and custom-pattern checking

use crate::errors::ConfigurationError;
use crate::options::{IdGeneration, PhoneMode};
use once_cell::sync::Lazy;
use regex::Regex;

/// Mobile phone, plain form: `1` followed by a 3-9 segment digit and nine
/// more digits. Example: `19119255642`.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3456789]\d{9}$").unwrap());

/// Mobile phone, strict: only the officially published segment prefixes,
/// with an optional `+86`/`0086` country prefix. Example: `008618311006933`.
static STRICT_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:\+|00)86)?1(?:(?:3[\d])|(?:4[5-79])|(?:5[0-35-9])|(?:6[5-7])|(?:7[0-8])|(?:8[\d])|(?:9[189]))\d{8}$",
    )
    .unwrap()
});

/// Mobile phone, loose: any `1[3-9]` prefix, optional country prefix.
static LOOSE_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:\+|00)86)?1[3-9]\d{9}$").unwrap());

/// National ID, first generation (15 digits). Example: `123456991010193`.
static FIRST_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d{7}(?:0\d|10|11|12)(?:0[1-9]|[1-2][\d]|30|31)\d{3}$").unwrap());

/// National ID, second generation (18 digits, trailing check character).
/// Example: `12345619991205131x`.
static SECOND_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[1-9]\d{5}(?:18|19|20)\d{2}(?:0[1-9]|10|11|12)(?:0[1-9]|[1-2]\d|30|31)\d{3}[\dXx]$",
    )
    .unwrap()
});

/// National ID, either generation (15 or 18 digits, with calendar checks).
static ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{6}((((((19|20)\d{2})(0[13-9]|1[012])(0[1-9]|[12]\d|30))|(((19|20)\d{2})(0[13578]|1[02])31)|((19|20)\d{2})02(0[1-9]|1\d|2[0-8])|((((19|20)([13579][26]|[2468][048]|0[48]))|(2000))0229))\d{3})|((((\d{2})(0[13-9]|1[012])(0[1-9]|[12]\d|30))|((\d{2})(0[13578]|1[02])31)|((\d{2})02(0[1-9]|1\d|2[0-8]))|(([13579][26]|[2468][048]|0[048])0229))\d{2}))(\d|X|x)$",
    )
    .unwrap()
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// Phone pattern for the requested mode; the plain pattern when no mode is
/// given.
pub fn phone_pattern(mode: Option<PhoneMode>) -> &'static Regex {
    match mode {
        None => &PHONE_REGEX,
        Some(PhoneMode::Strict) => &STRICT_PHONE_REGEX,
        Some(PhoneMode::Loose) => &LOOSE_PHONE_REGEX,
    }
}

/// National-ID pattern for the requested generation; the combined 15/18
/// digit pattern when no generation is given.
pub fn id_pattern(generation: Option<IdGeneration>) -> &'static Regex {
    match generation {
        None => &ID_REGEX,
        Some(IdGeneration::First) => &FIRST_ID_REGEX,
        Some(IdGeneration::Second) => &SECOND_ID_REGEX,
    }
}

/// Built-in email format pattern.
pub fn email_pattern() -> &'static Regex {
    &EMAIL_REGEX
}

/// Built-in URL format pattern.
pub fn url_pattern() -> &'static Regex {
    &URL_REGEX
}

/// Compile a caller-supplied pattern source.
///
/// A source that does not compile is a `ConfigurationError`. A source that
/// compiles but looks prone to catastrophic backtracking is reported with a
/// non-fatal warning; the compiled pattern is returned either way.
pub fn check_custom_pattern(source: &str) -> Result<Regex, ConfigurationError> {
    let pattern = Regex::new(source)?;
    if !is_safe_pattern(source) {
        log::warn!(
            "minivalid hint: {} looks like an unsafe regular expression (nested quantifiers), please check carefully",
            source
        );
    }
    Ok(pattern)
}

/// Heuristic star-height check: a quantifier applied to a group that itself
/// contains a quantifier is flagged as unsafe. Advisory only.
fn is_safe_pattern(source: &str) -> bool {
    let mut chars = source.chars();
    // For each open group, whether the enclosing level had a quantifier.
    let mut stack: Vec<bool> = Vec::new();
    let mut current_has_quantifier = false;
    let mut last_group_had_quantifier = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
                last_group_had_quantifier = false;
            }
            '[' => {
                while let Some(cc) = chars.next() {
                    match cc {
                        '\\' => {
                            chars.next();
                        }
                        ']' => break,
                        _ => {}
                    }
                }
                last_group_had_quantifier = false;
            }
            '(' => {
                stack.push(current_has_quantifier);
                current_has_quantifier = false;
                last_group_had_quantifier = false;
            }
            ')' => {
                last_group_had_quantifier = current_has_quantifier;
                let outer = stack.pop().unwrap_or(false);
                current_has_quantifier = outer || current_has_quantifier;
            }
            '*' | '+' => {
                if last_group_had_quantifier {
                    return false;
                }
                current_has_quantifier = true;
                last_group_had_quantifier = false;
            }
            '{' => {
                // Brace repetitions count as quantifiers too.
                let mut is_repetition = false;
                for cc in chars.by_ref() {
                    if cc == '}' {
                        is_repetition = true;
                        break;
                    }
                    if !cc.is_ascii_digit() && cc != ',' {
                        break;
                    }
                }
                if is_repetition {
                    if last_group_had_quantifier {
                        return false;
                    }
                    current_has_quantifier = true;
                }
                last_group_had_quantifier = false;
            }
            _ => {
                last_group_had_quantifier = false;
            }
        }
    }
    true
}
