//! Typed field values parsed out of a [`SubmissionRecord`].
//!
//! [`SubmissionRecord`]: super::SubmissionRecord

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::Rejection;

/// Youngest accepted age, inclusive.
pub const AGE_MIN: f64 = 18.0;
/// Oldest accepted age, inclusive.
pub const AGE_MAX: f64 = 120.0;
/// Number of digits in an accepted phone number.
pub const PHONE_DIGITS: usize = 10;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@`, non-empty local part, dotted domain, no whitespace anywhere.
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // `\d` would admit non-ASCII digits.
        Regex::new(&format!("^[0-9]{{{PHONE_DIGITS}}}$"))
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Whether a submitted value counts as supplied.
///
/// Missing keys, `null`, `false`, the empty string and numeric zero are all
/// treated as absent. Whitespace-only strings, arrays and objects count as
/// present.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Largest magnitude rendered in plain positional notation.
const POSITIONAL_LIMIT: f64 = 1e21;

/// Render a number the way it was meant, not the way it was spelled.
///
/// Whole floats such as `1234567890.0` or `1.23456789e9` render without a
/// fractional part, so the same value always produces the same text.
fn render_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64() && float.fract() == 0.0 && float.abs() < POSITIONAL_LIMIT =>
        {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}

/// Render a scalar value as text. Arrays, objects and `null` have no rendering.
#[must_use]
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) => Some(Cow::Owned(render_number(number))),
        Value::Bool(flag) => Some(Cow::Borrowed(if *flag { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Contact name. Any present value is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    /// Accept any present value; non-scalar values keep their JSON text.
    pub fn parse(value: Option<&Value>) -> Result<Self, Rejection> {
        match value {
            Some(raw) if is_present(value) => Ok(Self(
                as_text(raw).map_or_else(|| raw.to_string(), Cow::into_owned),
            )),
            _ => Err(Rejection::MissingFields),
        }
    }

    /// Borrow the name as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Email address in `local@domain.tld` shape.
///
/// # Examples
/// ```
/// use contact_intake::domain::submission::{EmailAddress, Rejection};
/// use serde_json::json;
///
/// assert!(EmailAddress::parse(Some(&json!("ada@example.com"))).is_ok());
/// assert_eq!(
///     EmailAddress::parse(Some(&json!("ada.example.com"))),
///     Err(Rejection::InvalidEmail)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate the rendered text of `value` against the email shape.
    pub fn parse(value: Option<&Value>) -> Result<Self, Rejection> {
        value
            .and_then(as_text)
            .filter(|text| email_regex().is_match(text))
            .map(|text| Self(text.into_owned()))
            .ok_or(Rejection::InvalidEmail)
    }

    /// Borrow the address as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age in years, finite and within [`AGE_MIN`]..=[`AGE_MAX`].
///
/// Fractional values inside the range are accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Age(f64);

impl Age {
    /// Validate an age already held as a number.
    pub fn new(years: f64) -> Result<Self, Rejection> {
        if years.is_finite() && (AGE_MIN..=AGE_MAX).contains(&years) {
            Ok(Self(years))
        } else {
            Err(Rejection::InvalidAge)
        }
    }

    /// Coerce a JSON number or numeric string and validate the range.
    ///
    /// Strings are trimmed before parsing. Booleans, arrays and objects never
    /// coerce.
    pub fn parse(value: Option<&Value>) -> Result<Self, Rejection> {
        let years = match value {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        years.map_or(Err(Rejection::InvalidAge), Self::new)
    }

    /// Age in years.
    #[must_use]
    pub fn years(self) -> f64 {
        self.0
    }
}

/// Phone number made of exactly [`PHONE_DIGITS`] ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate the rendered text of `value`; numbers are rendered first.
    pub fn parse(value: Option<&Value>) -> Result<Self, Rejection> {
        value
            .and_then(as_text)
            .filter(|text| phone_regex().is_match(text))
            .map(|text| Self(text.into_owned()))
            .ok_or(Rejection::InvalidPhone)
    }

    /// Borrow the digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
