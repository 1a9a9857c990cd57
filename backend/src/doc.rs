//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the `POST /submit` handler from the inbound layer
//! - **Schemas**: wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`SubmissionRequestSchema`]) that describe domain types without coupling
//!   them to utoipa, plus the success envelope
//!
//! The generated specification is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, SubmissionRequestSchema};
use crate::inbound::http::submission::{SubmissionAccepted, SuccessStatus};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact intake API",
        description = "Validates contact submissions and echoes accepted records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::submission::submit),
    components(schemas(
        SubmissionRequestSchema,
        SubmissionAccepted,
        SuccessStatus,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "submissions", description = "Contact submission validation")
    )
)]
pub struct ApiDoc;
