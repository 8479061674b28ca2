use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::get_service;
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::ServerConfig;
use activities::database::{seed, ActivityStore};
use activities::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let store = ActivityStore::new(seed::seed_activities());
    info!(activities = store.len(), "activity store seeded");
    if config.enforce_capacity {
        info!("capacity enforcement enabled");
    }

    let state = AppState::new(store).with_capacity_enforcement(config.enforce_capacity);

    let app = web::router(state).nest_service(
        "/static",
        get_service(ServeDir::new(&config.static_dir)).layer(
            SetResponseHeaderLayer::if_not_present(CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("cannot parse listen address {}:{}", config.host, config.port))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config
                .port
                .checked_add(1)
                .context("no fallback port above 65535")?;
            warn!(
                "could not bind {}: {}; trying {}:{}",
                addr, e, config.host, fallback_port
            );
            let fallback: SocketAddr = format!("{}:{}", config.host, fallback_port)
                .parse()
                .context("cannot parse fallback address")?;
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving activities on http://{}", bound_addr);
    info!("static assets from {}", config.static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
