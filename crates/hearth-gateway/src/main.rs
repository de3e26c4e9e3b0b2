use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

mod app;
mod http;
mod ws;

/// Schedule-list gateway for the hearth home-automation hub.
#[derive(Parser, Debug)]
#[command(name = "hearth-gateway", version)]
struct Cli {
    /// Path to hearth.toml. Falls back to HEARTH_CONFIG, then
    /// ~/.hearth/hearth.toml.
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth_gateway=info,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    // config: --config flag > HEARTH_CONFIG env > ~/.hearth/hearth.toml
    let config_path = cli.config.or_else(|| std::env::var("HEARTH_CONFIG").ok());
    let config = hearth_core::config::HearthConfig::load(config_path.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            hearth_core::config::HearthConfig::default()
        });

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;

    let storage_dir = std::path::PathBuf::from(&config.storage.dir);
    std::fs::create_dir_all(&storage_dir)?;

    // The backing file is read exactly once, before any request is served.
    // A malformed file aborts startup rather than silently starting empty.
    let store = hearth_schedules::ScheduleStore::in_dir(&storage_dir);
    info!(path = %store.path().display(), "loading schedule store");
    store.load().await?;
    info!(schedules = store.len(), "schedule store ready");

    let state = Arc::new(app::AppState::new(store));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Hearth gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
