//! Service entry-point: loads settings, seeds the directory, and serves REST.

use std::net::{SocketAddr, ToSocketAddrs};

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use usergroups::inbound::http::health::HealthState;
use usergroups::server::{ServerConfig, create_server};
use usergroups::settings::{DirectorySettings, build_store};

fn resolve_bind_addr(settings: &DirectorySettings) -> std::io::Result<SocketAddr> {
    (settings.host(), settings.port())
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            std::io::Error::other(format!(
                "no address resolved for {}:{}",
                settings.host(),
                settings.port()
            ))
        })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let store = build_store(&settings).map_err(std::io::Error::other)?;
    let bind_addr = resolve_bind_addr(&settings)?;

    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(usergroups::server::make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), store, config)?;
    info!(%bind_addr, "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
