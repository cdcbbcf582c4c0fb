use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use weather_core::{Config, provider::provider_from_config};
use weather_relay::{AppState, logging, router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    logging::init_tracing(&config)?;

    let state = AppState {
        provider: Arc::from(provider_from_config(&config)?),
    };

    let addr: SocketAddr = format!("{}:{}", config.relay.host, config.relay.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid relay bind {}:{}",
                config.relay.host, config.relay.port
            )
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("http server error")?;

    Ok(())
}
