//! Driving port for the contact submission use-case.
//!
//! Inbound adapters hand a decoded [`SubmissionRecord`] to this port and
//! render whatever [`ValidationOutcome`] comes back. Handler tests substitute
//! a recording double instead of the rule-backed service.

use tracing::{debug, warn};

use crate::domain::submission::{SubmissionRecord, ValidationOutcome, validate};

/// Domain use-case port for validating a contact submission.
pub trait SubmissionIntake: Send + Sync {
    /// Validate `record` and report the outcome.
    fn submit(&self, record: SubmissionRecord) -> ValidationOutcome;
}

/// Rule-backed implementation of [`SubmissionIntake`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmissionIntakeService;

impl SubmissionIntake for SubmissionIntakeService {
    fn submit(&self, record: SubmissionRecord) -> ValidationOutcome {
        let field_count = record.len();
        let outcome = validate(record);
        match &outcome {
            ValidationOutcome::Valid(_) => debug!(field_count, "submission accepted"),
            ValidationOutcome::Invalid(rejection) => warn!(
                field_count,
                code = %rejection.code(),
                "submission rejected"
            ),
        }
        outcome
    }
}
