//! Domain primitives and use-cases.
//!
//! Purpose: keep submission validation free of transport concerns. Inbound
//! adapters decode requests into a [`SubmissionRecord`], call the
//! [`ports::SubmissionIntake`] port and map the outcome onto their protocol.
//!
//! Public surface:
//! - Error / ErrorCode: the error envelope and its stable codes.
//! - submission: the record, typed field values, rules and outcome.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod submission;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::submission::{Rejection, Submission, SubmissionRecord, ValidationOutcome};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
