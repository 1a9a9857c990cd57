//! Contact submission handler.
//!
//! ```text
//! POST /submit {"name":"John Doe","email":"john@example.com","age":30,"phone":"1234567890"}
//! POST /submit name=John+Doe&email=john%40example.com&age=30&phone=1234567890
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Submission, SubmissionRecord, ValidationOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::SubmissionPayload;
use crate::inbound::http::schemas::{ErrorSchema, SubmissionRequestSchema};
use crate::inbound::http::state::HttpState;

/// Message returned with every accepted submission.
pub const SUBMISSION_ACCEPTED_MESSAGE: &str = "User data validated and processed successfully";

/// Discriminator carried by every success envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuccessStatus {
    Success,
}

/// Response body for `POST /submit` when every rule passes.
///
/// Example JSON:
/// `{"status":"success","message":"User data validated and processed successfully","data":{"name":"John Doe"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionAccepted {
    pub status: SuccessStatus,
    #[schema(example = "User data validated and processed successfully")]
    pub message: String,
    /// The submitted record, echoed unchanged.
    #[schema(value_type = Object)]
    pub data: SubmissionRecord,
}

impl From<Submission> for SubmissionAccepted {
    fn from(value: Submission) -> Self {
        Self {
            status: SuccessStatus::Success,
            message: SUBMISSION_ACCEPTED_MESSAGE.to_owned(),
            data: value.into_record(),
        }
    }
}

/// Validate a contact submission and echo it back.
///
/// Rules run in a fixed order (presence, email, age, phone) and only the
/// first failure is reported.
#[utoipa::path(
    post,
    path = "/submit",
    request_body(
        content = SubmissionRequestSchema,
        description = "Contact details; `application/x-www-form-urlencoded` bodies are accepted with the same field names",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Submission accepted", body = SubmissionAccepted),
        (status = 400, description = "Submission rejected or body malformed", body = ErrorSchema),
        (status = 413, description = "Body exceeds the configured limit", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "submitContact"
)]
#[post("/submit")]
pub async fn submit(
    state: web::Data<HttpState>,
    payload: SubmissionPayload,
) -> ApiResult<HttpResponse> {
    match state.intake.submit(payload.into_inner()) {
        ValidationOutcome::Valid(submission) => {
            info!(fields = submission.record().len(), "contact submission processed");
            Ok(HttpResponse::Ok().json(SubmissionAccepted::from(submission)))
        }
        ValidationOutcome::Invalid(rejection) => Err(rejection.into()),
    }
}
