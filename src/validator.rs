//! # Strategy pattern: a configurable form validator
//!
//! A [`Validator`] holds named [`Check`] strategies and a field-to-check
//! mapping. The same `validate` call works for any form; which algorithm runs
//! for a field is decided by the configuration.
//!
//! ```
//! use js_patterns::validator::{Validator, IS_NUMBER};
//!
//! let mut validator = Validator::with_builtin_checks();
//! validator.configure("age", IS_NUMBER);
//!
//! let failed = validator.validate([("age", "unknown")]).unwrap();
//! assert!(failed);
//! assert_eq!(validator.messages().len(), 1);
//! ```

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::error::PatternError;

pub const IS_NOT_EMPTY: &str = "isNotEmpty";
pub const IS_NUMBER: &str = "isNumber";
pub const IS_ALPHA_NUM: &str = "isAlphaNum";

// ============================================================================
// Checks
// ============================================================================

pub trait Check {
    fn validate(&self, value: &str) -> bool;

    /// Shown to the user when `validate` fails.
    fn instructions(&self) -> &str;
}

pub struct IsNotEmpty;

impl Check for IsNotEmpty {
    fn validate(&self, value: &str) -> bool {
        !value.is_empty()
    }

    fn instructions(&self) -> &str {
        "the value cannot be empty"
    }
}

/// Accepts what a loosely typed script would coerce to a number.
///
/// Blank input counts as zero, `0x`/`0o`/`0b` literals and a signed
/// `Infinity` are numbers, `nan` and `inf` are not. A byte-order mark is
/// trimmed like any other whitespace.
pub struct IsNumber;

impl IsNumber {
    fn coerces(value: &str) -> bool {
        let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
        if trimmed.is_empty() {
            return true;
        }

        for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
            let lower = trimmed.get(..2).map(str::to_ascii_lowercase);
            if lower.as_deref() == Some(prefix) {
                let digits = &trimmed[2..];
                return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
            }
        }

        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if unsigned == "Infinity" {
            return true;
        }

        // f64 parsing also takes "inf" and "nan", which must stay invalid.
        unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
            && trimmed.parse::<f64>().is_ok()
    }
}

impl Check for IsNumber {
    fn validate(&self, value: &str) -> bool {
        Self::coerces(value)
    }

    fn instructions(&self) -> &str {
        "the value can only be a valid number,e.g.1,3.14 or 2010"
    }
}

lazy_static! {
    static ref NON_ALPHA_NUM: Regex = Regex::new(r"[^a-zA-Z0-9]").expect("valid regex");
}

pub struct IsAlphaNum;

impl Check for IsAlphaNum {
    fn validate(&self, value: &str) -> bool {
        !NON_ALPHA_NUM.is_match(value)
    }

    fn instructions(&self) -> &str {
        "the value can only contain characters and numbers,no special symbols"
    }
}

/// A check built from a closure.
pub struct FnCheck<F>
where
    F: Fn(&str) -> bool,
{
    instructions: String,
    check_fn: F,
}

impl<F> FnCheck<F>
where
    F: Fn(&str) -> bool,
{
    pub fn new(instructions: impl Into<String>, check_fn: F) -> Self {
        Self {
            instructions: instructions.into(),
            check_fn,
        }
    }
}

impl<F> Check for FnCheck<F>
where
    F: Fn(&str) -> bool,
{
    fn validate(&self, value: &str) -> bool {
        (self.check_fn)(value)
    }

    fn instructions(&self) -> &str {
        &self.instructions
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Which check each field goes through, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        let fields = [
            ("first_name", IS_NOT_EMPTY),
            ("age", IS_NUMBER),
            ("username", IS_ALPHA_NUM),
        ]
        .into_iter()
        .map(|(field, check)| (field.to_string(), check.to_string()))
        .collect();
        Self { fields }
    }
}

// ============================================================================
// Validator
// ============================================================================

#[derive(Default)]
pub struct Validator {
    types: HashMap<String, Box<dyn Check>>,
    config: HashMap<String, String>,
    messages: Vec<String>,
}

impl Validator {
    /// A validator with no checks and no field mapping.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_checks() -> Self {
        let mut validator = Self::new();
        validator.register(IS_NOT_EMPTY, IsNotEmpty);
        validator.register(IS_NUMBER, IsNumber);
        validator.register(IS_ALPHA_NUM, IsAlphaNum);
        validator
    }

    /// Adds a check, replacing any check already registered as `name`.
    pub fn register(&mut self, name: impl Into<String>, check: impl Check + 'static) {
        self.types.insert(name.into(), Box::new(check));
    }

    pub fn configure(&mut self, field: impl Into<String>, check: impl Into<String>) {
        self.config.insert(field.into(), check.into());
    }

    pub fn with_config(mut self, config: &ValidatorConfig) -> Self {
        for (field, check) in &config.fields {
            self.configure(field.as_str(), check.as_str());
        }
        self
    }

    /// Runs the configured check for every field in `data`.
    ///
    /// Fields without a configured check are skipped. Returns whether any
    /// field failed; the failures are available from [`Self::messages`].
    /// A field mapped to an unregistered check aborts with
    /// [`PatternError::MissingChecker`], keeping the messages gathered so far.
    pub fn validate<I, K, V>(&mut self, data: I) -> Result<bool, PatternError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.messages.clear();

        for (field, value) in data {
            let field = field.as_ref();
            let Some(check_name) = self.config.get(field) else {
                continue;
            };
            let checker = self
                .types
                .get(check_name)
                .ok_or_else(|| PatternError::missing_checker(check_name.as_str()))?;

            if !checker.validate(value.as_ref()) {
                debug!(field, check = %check_name, "validation failed");
                self.messages.push(format!(
                    "Invalid value for *{field}*, {}",
                    checker.instructions()
                ));
            }
        }

        Ok(self.has_errors())
    }

    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(&'static str, &'static str)> {
        vec![
            ("first_name", "Super"),
            ("last_name", "Man"),
            ("age", "unknown"),
            ("username", "o_0"),
        ]
    }

    #[test]
    fn test_original_form_reports_age_and_username() {
        let mut validator =
            Validator::with_builtin_checks().with_config(&ValidatorConfig::default());

        let failed = validator.validate(sample()).unwrap();

        assert!(failed);
        assert_eq!(
            validator.messages(),
            [
                "Invalid value for *age*, the value can only be a valid number,e.g.1,3.14 or 2010",
                "Invalid value for *username*, the value can only contain characters and numbers,no special symbols",
            ]
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let mut validator =
            Validator::with_builtin_checks().with_config(&ValidatorConfig::default());

        let failed = validator
            .validate([("first_name", "Ada"), ("age", "36"), ("username", "ada1815")])
            .unwrap();

        assert!(!failed);
        assert!(!validator.has_errors());
    }

    #[test]
    fn test_messages_reset_between_runs() {
        let mut validator =
            Validator::with_builtin_checks().with_config(&ValidatorConfig::default());
        validator.validate(sample()).unwrap();
        assert_eq!(validator.messages().len(), 2);

        validator.validate([("age", "42")]).unwrap();
        assert!(validator.messages().is_empty());
    }

    #[test]
    fn test_unregistered_check_is_an_error() {
        let mut validator = Validator::with_builtin_checks();
        validator.configure("email", "isEmail");

        let err = validator.validate([("email", "a@b.c")]).unwrap_err();

        assert!(matches!(err, PatternError::MissingChecker { ref check } if check == "isEmail"));
    }

    #[test]
    fn test_unconfigured_fields_are_skipped() {
        let mut validator = Validator::with_builtin_checks();
        assert!(!validator.validate([("anything", "")]).unwrap());
    }

    #[test]
    fn test_closure_check() {
        let mut validator = Validator::new();
        validator.register("isShort", FnCheck::new("at most 3 characters", |v: &str| v.len() <= 3));
        validator.configure("code", "isShort");

        assert!(validator.validate([("code", "ABCD")]).unwrap());
        assert_eq!(
            validator.messages(),
            ["Invalid value for *code*, at most 3 characters"]
        );
    }

    #[test]
    fn test_register_replaces_existing_check() {
        let mut validator = Validator::with_builtin_checks();
        validator.register(IS_NUMBER, FnCheck::new("digits only", |v: &str| {
            !v.is_empty() && v.chars().all(|c| c.is_ascii_digit())
        }));
        validator.configure("age", IS_NUMBER);

        assert!(validator.validate([("age", "")]).unwrap());
    }

    #[test]
    fn test_is_not_empty() {
        assert!(IsNotEmpty.validate("x"));
        assert!(IsNotEmpty.validate(" "));
        assert!(!IsNotEmpty.validate(""));
    }

    #[test]
    fn test_is_number_accepts_script_numbers() {
        for value in ["2010", "3.14", "-1", "+7", ".5", "1.", "1e3", "", "  ", " 42 ", "0x1F", "0b101", "0o17", "Infinity", "-Infinity", "\u{FEFF}1", "\u{FEFF}"] {
            assert!(IsNumber.validate(value), "expected {value:?} to be a number");
        }
    }

    #[test]
    fn test_is_number_rejects_words() {
        for value in ["unknown", "nan", "NaN", "inf", "infinity", "1,000", "12abc", "0x", "0xZZ", "-0x10", "e5", "."] {
            assert!(!IsNumber.validate(value), "expected {value:?} to be rejected");
        }
    }

    #[test]
    fn test_is_alpha_num() {
        assert!(IsAlphaNum.validate("Super123"));
        assert!(IsAlphaNum.validate(""));
        assert!(!IsAlphaNum.validate("o_0"));
        assert!(!IsAlphaNum.validate("has space"));
        assert!(!IsAlphaNum.validate("é"));
    }

    #[test]
    fn test_is_alpha_num_ignores_unicode_case_folding() {
        // Kelvin sign and long s fold to ASCII letters case-insensitively.
        for value in ["\u{212A}", "\u{017F}", "ok\u{212A}", "\u{017F}tr"] {
            assert!(!IsAlphaNum.validate(value), "expected {value:?} to be rejected");
        }
        assert!(IsAlphaNum.validate("OkK"));
    }
}
