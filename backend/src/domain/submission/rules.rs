//! Ordered validation rules for submissions.
//!
//! Each rule is a pure function of the record. [`RULES`] fixes the priority
//! order; [`apply_rules`] stops at the first rejection so a submission that
//! breaks several rules only ever reports the earliest one.

use super::fields::{Age, EmailAddress, PhoneNumber, is_present};
use super::{FieldName, Rejection, SubmissionRecord};

/// A single validation rule.
pub type Rule = fn(&SubmissionRecord) -> Result<(), Rejection>;

/// Rules in priority order: presence, email, age, phone.
pub const RULES: [Rule; 4] = [check_presence, check_email, check_age, check_phone];

/// Run `rules` in order, returning the first rejection.
///
/// # Examples
/// ```
/// use contact_intake::domain::submission::{RULES, Rejection, SubmissionRecord, apply_rules};
/// use serde_json::json;
///
/// let record = SubmissionRecord::from_json(json!({
///     "name": "Ada",
///     "email": "not-an-email",
///     "age": 7,
///     "phone": "1234567890",
/// }));
/// assert_eq!(apply_rules(&record, &RULES), Err(Rejection::InvalidEmail));
/// ```
pub fn apply_rules(record: &SubmissionRecord, rules: &[Rule]) -> Result<(), Rejection> {
    rules.iter().try_for_each(|rule| rule(record))
}

/// Every required field is present. Reports one generic rejection no matter
/// which fields are missing.
pub fn check_presence(record: &SubmissionRecord) -> Result<(), Rejection> {
    if FieldName::REQUIRED
        .iter()
        .all(|field| is_present(record.field(*field)))
    {
        Ok(())
    } else {
        Err(Rejection::MissingFields)
    }
}

/// The email renders as `local@domain.tld`.
pub fn check_email(record: &SubmissionRecord) -> Result<(), Rejection> {
    EmailAddress::parse(record.field(FieldName::Email)).map(drop)
}

/// The age is numeric and within range.
pub fn check_age(record: &SubmissionRecord) -> Result<(), Rejection> {
    Age::parse(record.field(FieldName::Age)).map(drop)
}

/// The phone renders as exactly ten ASCII digits.
pub fn check_phone(record: &SubmissionRecord) -> Result<(), Rejection> {
    PhoneNumber::parse(record.field(FieldName::Phone)).map(drop)
}
