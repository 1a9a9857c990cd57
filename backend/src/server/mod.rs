//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use contact_intake::Trace;
use contact_intake::inbound::http::configure;
use contact_intake::inbound::http::payload::BodyLimits;
use contact_intake::inbound::http::state::HttpState;

fn build_app(
    http_state: web::Data<HttpState>,
    limits: BodyLimits,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Trace)
        .configure(configure(http_state, limits))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Parameters
/// - `config`: pre-built [`ServerConfig`] containing the bind address and body limits.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::default());
    let ServerConfig { bind_addr, limits } = config;

    let server = HttpServer::new(move || build_app(http_state.clone(), limits)).bind(bind_addr)?;
    for addr in server.addrs() {
        info!(%addr, "listening");
    }
    Ok(server.run())
}
