//! Behaviour tests for the contact submission endpoint.
//!
//! Each scenario posts a submission through the full application stack,
//! including the trace middleware, and inspects the JSON envelope returned.

use std::cell::RefCell;

use actix_web::{App, test as actix_test, web};
use contact_intake::Trace;
use contact_intake::domain::TRACE_ID_HEADER;
use contact_intake::inbound::http::configure;
use contact_intake::inbound::http::payload::BodyLimits;
use contact_intake::inbound::http::state::HttpState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Map, Value, json};

#[derive(Debug)]
struct Captured {
    status: u16,
    trace_id: Option<String>,
    body: Value,
}

#[derive(Debug, Clone, Copy)]
enum Encoding {
    Json,
    Form,
}

#[derive(Debug, Default)]
struct SubmissionWorld {
    fields: RefCell<Map<String, Value>>,
    response: RefCell<Option<Captured>>,
}

impl SubmissionWorld {
    fn post(&self, encoding: Encoding) {
        let fields = self.fields.borrow().clone();
        let captured = actix_rt::System::new().block_on(async move {
            let app = actix_test::init_service(App::new().wrap(Trace).configure(configure(
                web::Data::new(HttpState::default()),
                BodyLimits::default(),
            )))
            .await;
            let request = actix_test::TestRequest::post().uri("/submit");
            let request = match encoding {
                Encoding::Json => request.set_json(Value::Object(fields)),
                Encoding::Form => request.set_form(form_pairs(&fields)),
            };
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = actix_test::read_body(response).await;
            Captured {
                status,
                trace_id,
                body: serde_json::from_slice(&body).expect("json response body"),
            }
        });
        *self.response.borrow_mut() = Some(captured);
    }

    fn with_response<F>(&self, f: F)
    where
        F: FnOnce(&Captured),
    {
        let response = self.response.borrow();
        f(response.as_ref().expect("submission posted"));
    }

    fn body_str(&self, pointer: &str) -> Option<String> {
        let response = self.response.borrow();
        response
            .as_ref()
            .expect("submission posted")
            .body
            .pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

fn form_pairs(fields: &Map<String, Value>) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

#[fixture]
fn world() -> SubmissionWorld {
    SubmissionWorld::default()
}

#[given("a complete contact submission")]
fn a_complete_contact_submission(world: &SubmissionWorld) {
    let Value::Object(fields) = json!({
        "name": "John Doe",
        "email": "john@example.com",
        "age": 30,
        "phone": "1234567890",
    }) else {
        unreachable!("literal is an object");
    };
    *world.fields.borrow_mut() = fields;
}

#[given("the field \"{field}\" is removed")]
fn the_field_is_removed(world: &SubmissionWorld, field: String) {
    world.fields.borrow_mut().remove(&field);
}

#[given("the field \"{field}\" is blank")]
fn the_field_is_blank(world: &SubmissionWorld, field: String) {
    world
        .fields
        .borrow_mut()
        .insert(field, Value::String(String::new()));
}

#[given("the field \"{field}\" is set to \"{value}\"")]
fn the_field_is_set_to(world: &SubmissionWorld, field: String, value: String) {
    world.fields.borrow_mut().insert(field, Value::String(value));
}

#[when("the submission is posted as JSON")]
fn the_submission_is_posted_as_json(world: &SubmissionWorld) {
    world.post(Encoding::Json);
}

#[when("the submission is posted as a form")]
fn the_submission_is_posted_as_a_form(world: &SubmissionWorld) {
    world.post(Encoding::Form);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &SubmissionWorld, status: u16) {
    world.with_response(|response| assert_eq!(response.status, status));
}

#[then("the response status field is \"{expected}\"")]
fn the_response_status_field_is(world: &SubmissionWorld, expected: String) {
    assert_eq!(world.body_str("/status"), Some(expected));
}

#[then("the response message is \"{expected}\"")]
fn the_response_message_is(world: &SubmissionWorld, expected: String) {
    assert_eq!(world.body_str("/message"), Some(expected));
}

#[then("the response echoes the submission")]
fn the_response_echoes_the_submission(world: &SubmissionWorld) {
    let submitted = Value::Object(world.fields.borrow().clone());
    world.with_response(|response| {
        assert_eq!(response.body.get("data"), Some(&submitted));
    });
}

#[then("the error code is \"{code}\"")]
fn the_error_code_is(world: &SubmissionWorld, code: String) {
    assert_eq!(world.body_str("/status").as_deref(), Some("error"));
    assert_eq!(world.body_str("/code"), Some(code));
}

#[then("the error message is \"{message}\"")]
fn the_error_message_is(world: &SubmissionWorld, message: String) {
    assert_eq!(world.body_str("/error"), Some(message));
}

#[then("the response carries a trace identifier")]
fn the_response_carries_a_trace_identifier(world: &SubmissionWorld) {
    world.with_response(|response| {
        let trace_id = response.trace_id.as_deref().expect("trace-id header");
        assert!(trace_id.parse::<contact_intake::TraceId>().is_ok());
    });
}

#[scenario(path = "tests/features/submission.feature")]
fn submission_scenarios(world: SubmissionWorld) {
    drop(world);
}
