//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
pub enum ErrorCodeSchema {
    /// Name, email, age or phone is absent or empty.
    #[schema(rename = "ERR_MISSING_FIELDS")]
    MissingFields,
    /// The email does not look like `local@domain.tld`.
    #[schema(rename = "ERR_INVALID_EMAIL")]
    InvalidEmail,
    /// The age is not a number between 18 and 120.
    #[schema(rename = "ERR_INVALID_AGE")]
    InvalidAge,
    /// The phone number is not exactly ten digits.
    #[schema(rename = "ERR_INVALID_PHONE")]
    InvalidPhone,
    /// The request body could not be decoded.
    #[schema(rename = "ERR_MALFORMED_BODY")]
    MalformedBody,
    /// The request body exceeds the configured limit.
    #[schema(rename = "ERR_PAYLOAD_TOO_LARGE")]
    PayloadTooLarge,
    /// An unexpected error occurred on the server.
    #[schema(rename = "ERR_INTERNAL")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Error envelope with a machine-readable code and a human-readable message.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `error`.
    #[schema(example = "error")]
    status: String,
    /// Stable machine-readable error code.
    #[schema(example = "ERR_INVALID_EMAIL")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Invalid email format")]
    error: String,
}

/// OpenAPI schema for [`crate::domain::SubmissionRecord`] as submitted.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SubmissionRequestSchema {
    /// Required; any non-empty value.
    #[schema(example = "John Doe")]
    name: String,
    /// Required; `local@domain.tld`.
    #[schema(example = "john@example.com")]
    email: String,
    /// Required; number or numeric string between 18 and 120.
    #[schema(example = 30, minimum = 18, maximum = 120)]
    age: f64,
    /// Required; exactly ten digits.
    #[schema(example = "1234567890", pattern = "^[0-9]{10}$")]
    phone: String,
}
