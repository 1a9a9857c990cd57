//! Validation failures reported for a submission.

use crate::domain::ErrorCode;

/// The single rule violation reported for a rejected submission.
///
/// Variants are declared in the priority order the rules run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    MissingFields,
    InvalidEmail,
    InvalidAge,
    InvalidPhone,
}

impl Rejection {
    /// Machine-readable code surfaced to clients.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::MissingFields => ErrorCode::MissingFields,
            Self::InvalidEmail => ErrorCode::InvalidEmail,
            Self::InvalidAge => ErrorCode::InvalidAge,
            Self::InvalidPhone => ErrorCode::InvalidPhone,
        }
    }

    /// Fixed human-readable message for the code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Name, email, age, and phone are required",
            Self::InvalidEmail => "Invalid email format",
            Self::InvalidAge => "Age must be a number between 18 and 120",
            Self::InvalidPhone => "Invalid phone number format (must be 10 digits)",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Rejection {}
