//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without wiring.

use std::sync::Arc;

use crate::domain::ports::{SubmissionIntake, SubmissionIntakeService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub intake: Arc<dyn SubmissionIntake>,
}

impl HttpState {
    /// Construct state from an explicit port implementation.
    pub fn new(intake: Arc<dyn SubmissionIntake>) -> Self {
        Self { intake }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(SubmissionIntakeService))
    }
}
