//! Contact submission validation.
//!
//! Purpose: turn a loosely typed [`SubmissionRecord`] into either a typed
//! [`Submission`] or a single [`Rejection`]. Rules run in a fixed order
//! (presence, email, age, phone) and the first failure wins.

mod fields;
mod record;
mod rejection;
mod rules;

pub use self::fields::{
    AGE_MAX, AGE_MIN, Age, ContactName, EmailAddress, PHONE_DIGITS, PhoneNumber, as_text,
    is_present,
};
pub use self::record::{FieldName, SubmissionRecord};
pub use self::rejection::Rejection;
pub use self::rules::{
    RULES, Rule, apply_rules, check_age, check_email, check_phone, check_presence,
};

/// A submission that passed every rule.
///
/// Holds the typed field values alongside the untouched record so callers can
/// echo exactly what the client sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    name: ContactName,
    email: EmailAddress,
    age: Age,
    phone: PhoneNumber,
    record: SubmissionRecord,
}

impl Submission {
    /// Run [`RULES`] over `record`, then build the typed values.
    ///
    /// The rejection is always the one [`apply_rules`] reports; the typed
    /// parsers only run once every rule has passed.
    pub fn from_record(record: SubmissionRecord) -> Result<Self, Rejection> {
        apply_rules(&record, &RULES)?;
        Ok(Self {
            name: ContactName::parse(record.field(FieldName::Name))?,
            email: EmailAddress::parse(record.field(FieldName::Email))?,
            age: Age::parse(record.field(FieldName::Age))?,
            phone: PhoneNumber::parse(record.field(FieldName::Phone))?,
            record,
        })
    }

    /// Submitted name.
    #[must_use]
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Validated email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Validated age.
    #[must_use]
    pub fn age(&self) -> Age {
        self.age
    }

    /// Validated phone number.
    #[must_use]
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// The record exactly as submitted.
    #[must_use]
    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    /// Give back the record exactly as submitted.
    #[must_use]
    pub fn into_record(self) -> SubmissionRecord {
        self.record
    }
}

/// Result of validating one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Every rule passed.
    Valid(Submission),
    /// The first rule that failed.
    Invalid(Rejection),
}

impl ValidationOutcome {
    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<Submission, Rejection> {
        match self {
            Self::Valid(submission) => Ok(submission),
            Self::Invalid(rejection) => Err(rejection),
        }
    }

    /// Whether the submission was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<Result<Submission, Rejection>> for ValidationOutcome {
    fn from(value: Result<Submission, Rejection>) -> Self {
        match value {
            Ok(submission) => Self::Valid(submission),
            Err(rejection) => Self::Invalid(rejection),
        }
    }
}

/// Validate `record` against [`RULES`].
///
/// # Examples
/// ```
/// use contact_intake::domain::submission::{Rejection, SubmissionRecord, ValidationOutcome, validate};
/// use serde_json::json;
///
/// let record = SubmissionRecord::from_json(json!({ "name": "Ada", "email": "ada@example.com" }));
/// assert_eq!(validate(record), ValidationOutcome::Invalid(Rejection::MissingFields));
/// ```
#[must_use]
pub fn validate(record: SubmissionRecord) -> ValidationOutcome {
    Submission::from_record(record).into()
}
