//! Backend entry-point: loads settings, initialises tracing and serves `POST /submit`.

mod server;

use color_eyre::eyre::{Context, Result, eyre};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use contact_intake::config::{LogFormat, ServerSettings};
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load server settings: {err}"))?;
    init_tracing(settings.log_format()?);

    let config = ServerConfig::try_from(&settings)?;
    let server = create_server(config)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr()))?;
    server.await.wrap_err("server terminated with an error")
}

fn init_tracing(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

#[cfg(test)]
mod tests;
