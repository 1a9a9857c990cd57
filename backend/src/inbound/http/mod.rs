//! HTTP inbound adapter exposing the submission endpoint.

pub mod error;
pub mod payload;
pub mod schemas;
pub mod state;
pub mod submission;

pub use error::ApiResult;

use actix_web::web;

use self::payload::BodyLimits;
use self::state::HttpState;

/// Register the submission route together with its state and body limits.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use contact_intake::inbound::http::{configure, payload::BodyLimits, state::HttpState};
///
/// let app = App::new().configure(configure(
///     web::Data::new(HttpState::default()),
///     BodyLimits::default(),
/// ));
/// ```
pub fn configure(
    state: web::Data<HttpState>,
    limits: BodyLimits,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state)
            .app_data(limits)
            .app_data(limits.form_config())
            .service(submission::submit);
    }
}
