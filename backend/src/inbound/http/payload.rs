//! Body decoding for submissions.
//!
//! JSON and URL-encoded form bodies both decode into the same flat
//! [`SubmissionRecord`], so validation never needs to know which encoding the
//! client used. Decoding failures surface as domain [`Error`]s. An empty JSON
//! body decodes to an empty record and is rejected by the presence rule.

use actix_web::dev::Payload;
use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::{LocalBoxFuture, ready};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Error, SubmissionRecord};

/// Default body size limit applied to both encodings, in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 16 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Size limits for submission bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimits {
    /// Maximum JSON body size in bytes.
    pub json: usize,
    /// Maximum form body size in bytes.
    pub form: usize,
}

impl Default for BodyLimits {
    fn default() -> Self {
        Self {
            json: DEFAULT_BODY_LIMIT,
            form: DEFAULT_BODY_LIMIT,
        }
    }
}

impl BodyLimits {
    /// Form extractor configuration mapping failures onto domain errors.
    #[must_use]
    pub fn form_config(&self) -> web::FormConfig {
        web::FormConfig::default()
            .limit(self.form)
            .error_handler(|err, _req| map_form_error(&err).into())
    }
}

/// A JSON body with no bytes at all decodes like `{}`.
fn is_empty_body(err: &JsonPayloadError) -> bool {
    matches!(
        err,
        JsonPayloadError::Deserialize(inner)
            if inner.is_eof() && inner.line() == 1 && inner.column() == 0
    )
}

pub(crate) fn map_json_error(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "json submission body rejected");
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            Error::payload_too_large()
        }
        _ => Error::malformed_body(),
    }
}

pub(crate) fn map_form_error(err: &UrlencodedError) -> Error {
    debug!(error = %err, "form submission body rejected");
    match err {
        UrlencodedError::Overflow { .. } => Error::payload_too_large(),
        _ => Error::malformed_body(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(req: &HttpRequest) -> Self {
        let content_type = req.content_type();
        if content_type.eq_ignore_ascii_case(JSON_CONTENT_TYPE)
            || content_type.to_ascii_lowercase().ends_with("+json")
        {
            Self::Json
        } else if content_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Extractor yielding a [`SubmissionRecord`] from a JSON or form body.
///
/// Bodies with any other (or no) content type produce an empty record rather
/// than an error; the presence rule then rejects it.
///
/// # Examples
/// ```
/// use actix_web::{HttpResponse, post};
/// use contact_intake::inbound::http::payload::SubmissionPayload;
///
/// #[post("/echo")]
/// async fn echo(payload: SubmissionPayload) -> HttpResponse {
///     HttpResponse::Ok().json(payload.into_inner())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload(SubmissionRecord);

impl SubmissionPayload {
    /// Take the decoded record.
    #[must_use]
    pub fn into_inner(self) -> SubmissionRecord {
        self.0
    }
}

impl FromRequest for SubmissionPayload {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match BodyKind::of(req) {
            BodyKind::Json => {
                let limit = req
                    .app_data::<BodyLimits>()
                    .copied()
                    .unwrap_or_default()
                    .json;
                let body = web::JsonBody::<Value>::new(req, payload, None, false).limit(limit);
                Box::pin(async move {
                    match body.await {
                        Ok(value) => Ok(Self(SubmissionRecord::from_json(value))),
                        Err(err) if is_empty_body(&err) => Ok(Self(SubmissionRecord::default())),
                        Err(err) => Err(map_json_error(&err).into()),
                    }
                })
            }
            BodyKind::Form => {
                let fut = web::Form::<Vec<(String, String)>>::from_request(req, payload);
                Box::pin(async move {
                    let web::Form(pairs) = fut.await?;
                    Ok(Self(SubmissionRecord::from_form_pairs(pairs)))
                })
            }
            BodyKind::Other => {
                debug!(
                    content_type = req.content_type(),
                    "unrecognised submission content type; treating body as empty"
                );
                Box::pin(ready(Ok(Self(SubmissionRecord::default()))))
            }
        }
    }
}
