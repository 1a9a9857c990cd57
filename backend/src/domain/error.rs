//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the serialised shape is the wire envelope
//! `{"status":"error","code":"ERR_...","error":"..."}`.

use serde::{Deserialize, Serialize};

use crate::domain::submission::Rejection;

/// Stable machine-readable error code describing the failure category.
///
/// The first four variants are produced by submission validation and are
/// checked in declaration order. The remaining variants come from body
/// decoding and unexpected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// One or more of name, email, age or phone is absent or empty.
    #[serde(rename = "ERR_MISSING_FIELDS")]
    MissingFields,
    /// The email does not look like `local@domain.tld`.
    #[serde(rename = "ERR_INVALID_EMAIL")]
    InvalidEmail,
    /// The age is not a number between 18 and 120.
    #[serde(rename = "ERR_INVALID_AGE")]
    InvalidAge,
    /// The phone number is not exactly ten digits.
    #[serde(rename = "ERR_INVALID_PHONE")]
    InvalidPhone,
    /// The request body could not be decoded.
    #[serde(rename = "ERR_MALFORMED_BODY")]
    MalformedBody,
    /// The request body exceeds the configured size limit.
    #[serde(rename = "ERR_PAYLOAD_TOO_LARGE")]
    PayloadTooLarge,
    /// An unexpected error occurred while handling the request.
    #[serde(rename = "ERR_INTERNAL")]
    InternalError,
}

impl ErrorCode {
    /// Wire representation of the code.
    ///
    /// # Examples
    /// ```
    /// use contact_intake::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::InvalidPhone.as_str(), "ERR_INVALID_PHONE");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingFields => "ERR_MISSING_FIELDS",
            Self::InvalidEmail => "ERR_INVALID_EMAIL",
            Self::InvalidAge => "ERR_INVALID_AGE",
            Self::InvalidPhone => "ERR_INVALID_PHONE",
            Self::MalformedBody => "ERR_MALFORMED_BODY",
            Self::PayloadTooLarge => "ERR_PAYLOAD_TOO_LARGE",
            Self::InternalError => "ERR_INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const MALFORMED_BODY_MESSAGE: &str = "Request body could not be parsed";
const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body exceeds the configured limit";
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use contact_intake::domain::{Error, ErrorCode};
///
/// let err = Error::try_new(ErrorCode::MalformedBody, "bad body").expect("valid error");
/// assert_eq!(err.code(), ErrorCode::MalformedBody);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The request body could not be decoded.
    #[must_use]
    pub fn malformed_body() -> Self {
        Self::fixed(ErrorCode::MalformedBody, MALFORMED_BODY_MESSAGE)
    }

    /// The request body is larger than the configured limit.
    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::fixed(ErrorCode::PayloadTooLarge, PAYLOAD_TOO_LARGE_MESSAGE)
    }

    /// Opaque internal failure. The message never carries implementation detail.
    #[must_use]
    pub fn internal() -> Self {
        Self::fixed(ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
    }

    fn fixed(code: ErrorCode, message: &'static str) -> Self {
        Self {
            code,
            message: message.to_owned(),
        }
    }
}

impl From<Rejection> for Error {
    fn from(value: Rejection) -> Self {
        Self::fixed(value.code(), value.message())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Discriminator carried by every error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ErrorStatus {
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorDto {
    status: ErrorStatus,
    code: ErrorCode,
    #[serde(rename = "error")]
    message: String,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            status: ErrorStatus::Error,
            code: value.code,
            message: value.message,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            status: _,
            code,
            message,
        } = value;
        Error::try_new(code, message)
    }
}
