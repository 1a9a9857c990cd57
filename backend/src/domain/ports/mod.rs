//! Domain ports for the hexagonal boundary.

mod submission_intake;

pub use submission_intake::{SubmissionIntake, SubmissionIntakeService};
