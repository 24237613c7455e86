use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use service::db;
use service::mongo::{MongoBioDataRepository, MongoProgramRepository};

use crate::routes::{self, ServerState};

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml when present, otherwise defaults; env vars override the
/// listen address and supply the store URL.
fn load_config() -> anyhow::Result<AppConfig> {
    let mut cfg = configs::load_default().unwrap_or_default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Public entry: wire config, store handles, and router, then serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    let db = db::connect(&cfg.database).await?;
    db::ensure_indexes(&db).await?;

    let state = ServerState {
        biodata: Arc::new(MongoBioDataRepository::new(&db)),
        programs: Arc::new(MongoProgramRepository::new(&db)),
    };

    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting biodata server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
