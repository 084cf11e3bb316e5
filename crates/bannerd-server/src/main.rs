//! # Bannerd Server
//!
//! Main entry point: loads configuration, wires the store, caches, and
//! services together, and serves the REST API until shutdown.

use bannerd_config::{AppConfig, ConfigLoader, SeedConfig};
use bannerd_core::{BannerdError, BannerdResult};
use bannerd_repository::{DatabasePool, PgBannerRepository, PgUserRepository, UserRepository};
use bannerd_rest::{create_router, AppState};
use bannerd_service::{
    AuthCache, AuthService, AuthServiceImpl, BannerCache, BannerService, BannerServiceImpl,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting bannerd server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> BannerdResult<()> {
    let config = ConfigLoader::from_default_location()?;

    info!("Environment: {}", config.app.environment);

    // Store
    let db_pool = Arc::new(DatabasePool::new(&config.database).await?);
    db_pool.run_migrations().await?;

    let banner_repository = Arc::new(PgBannerRepository::new(db_pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(db_pool.clone()));

    seed_users(user_repository.as_ref(), &config.seed).await?;

    // Caches: constructed once here and handed to the services; the sweepers
    // only reclaim expired entries early, they never change semantics.
    let banner_cache = Arc::new(BannerCache::new(config.cache.banner_ttl()));
    let auth_cache = Arc::new(AuthCache::new(config.cache.auth_ttl()));
    let banner_sweeper = BannerCache::spawn_sweeper(&banner_cache, config.cache.sweep_interval());
    let auth_sweeper = AuthCache::spawn_sweeper(&auth_cache, config.cache.sweep_interval());

    // Services
    let banner_service: Arc<dyn BannerService> =
        Arc::new(BannerServiceImpl::new(banner_repository, banner_cache));
    let auth_service: Arc<dyn AuthService> =
        Arc::new(AuthServiceImpl::new(user_repository, auth_cache));

    let state = AppState::new(banner_service, auth_service);
    let router = create_router(state, &config.server);

    serve(router, &config).await?;

    banner_sweeper.abort();
    auth_sweeper.abort();
    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

async fn serve(router: axum::Router, config: &AppConfig) -> BannerdResult<()> {
    let addr = config.server.addr();
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BannerdError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BannerdError::Internal(format!("HTTP server error: {}", e)))
}

/// Ensures the out-of-band identities exist before the gate takes traffic.
async fn seed_users(repository: &PgUserRepository, seed: &SeedConfig) -> BannerdResult<()> {
    repository.upsert_seed_user(&seed.user_token, false).await?;
    repository.upsert_seed_user(&seed.admin_token, true).await?;
    info!("Seed users ensured");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
