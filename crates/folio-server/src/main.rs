//! # Folio Server
//!
//! Main entry point for the Folio book catalog API.

use folio_config::ConfigLoader;
use folio_core::{FolioError, FolioResult};
use folio_repository::{create_pool, DatabasePoolInterface};
use folio_rest::create_router;
use folio_server::{di, seed, startup};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Folio server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> FolioResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);
    startup::print_banner();

    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // The cache backend decides the module wiring: Redis for multi-instance
    // deployments, the in-process cache otherwise.
    let router = if config.redis.enabled {
        info!("Cache backend: Redis at {}", config.redis.url);
        let module = di::build_redis_module(db_pool.inner().clone(), &config.redis)?;
        if config.database.seed_demo_data {
            use di::RepositoryResolver;
            seed::seed_demo_data(
                module.book_repository().as_ref(),
                module.author_repository().as_ref(),
            )
            .await?;
        }
        create_router(module.as_ref(), &config.server)
    } else {
        info!("Cache backend: in-process");
        let module = di::build_local_module(db_pool.inner().clone());
        if config.database.seed_demo_data {
            use di::RepositoryResolver;
            seed::seed_demo_data(
                module.book_repository().as_ref(),
                module.author_repository().as_ref(),
            )
            .await?;
        }
        create_router(module.as_ref(), &config.server)
    };

    let rest_addr = config.server.rest_addr();
    startup::print_startup_info(config.server.rest_port);
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| FolioError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
