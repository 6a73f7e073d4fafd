use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use marquee_auth_types::identity::SessionSettings;
use marquee_core::tracing::init_tracing;
use marquee_store::config::StoreConfig;
use marquee_store::router::build_router;
use marquee_store::state::AppState;
use marquee_store::usecase::catalog::{SeedCatalogUseCase, parse_seed};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        session: SessionSettings {
            secret: Arc::from(config.session_secret.as_str()),
            ttl_secs: config.session_ttl_secs,
            secure_cookie: config.cookie_secure,
        },
        media_url: Arc::from(config.media_url.as_str()),
    };

    if let Some(path) = &config.catalog_seed_path {
        let json = tokio::fs::read_to_string(path)
            .await
            .expect("failed to read catalog seed file");
        let seed = parse_seed(&json).expect("invalid catalog seed file");
        let usecase = SeedCatalogUseCase {
            movies: state.movie_repo(),
        };
        usecase.execute(&seed).await.expect("failed to seed catalog");
    }

    let router = build_router(state, &config.media_root);
    let http_addr = format!("0.0.0.0:{}", config.store_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("store service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
