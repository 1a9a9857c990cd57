//! Tests for the application bootstrap, covering configuration resolution and
//! server creation.

use super::server::{ServerConfig, create_server};
use contact_intake::config::{ServerSettings, StartupError};
use contact_intake::inbound::http::payload::BodyLimits;
use rstest::{fixture, rstest};
use std::net::SocketAddr;

#[fixture]
fn loopback_settings() -> ServerSettings {
    ServerSettings {
        host: Some("127.0.0.1".into()),
        port: Some(0),
        ..ServerSettings::default()
    }
}

#[rstest]
fn settings_resolve_into_server_config(loopback_settings: ServerSettings) {
    let config = ServerConfig::try_from(&loopback_settings).expect("valid settings");

    assert_eq!(config.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 0)));
    assert_eq!(
        config,
        ServerConfig::new(config.bind_addr(), BodyLimits::default())
    );
}

#[rstest]
fn invalid_host_fails_resolution(loopback_settings: ServerSettings) {
    let settings = ServerSettings {
        host: Some("example.invalid".into()),
        ..loopback_settings
    };

    let err = ServerConfig::try_from(&settings).expect_err("host must be an IP");
    assert!(matches!(err, StartupError::InvalidHost { .. }));
}

#[rstest]
#[actix_rt::test]
async fn create_server_binds_ephemeral_port(loopback_settings: ServerSettings) {
    let config = ServerConfig::try_from(&loopback_settings).expect("valid settings");

    let server = create_server(config).expect("server should bind");
    let handle = server.handle();
    actix_rt::spawn(server);
    handle.stop(true).await;
}
