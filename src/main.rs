use ant_hub::application::services::{ApplicationServices, Repositories};
use ant_hub::config::AppConfig;
use ant_hub::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCatalogReadRepository,
        SqliteCatalogWriteRepository, SqliteContentReadRepository, SqliteContentWriteRepository,
    },
};
use ant_hub::presentation::http::{routes::build_router_with_options, state::HttpState};
use ant_hub::telemetry::init_tracing;
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let repos = Repositories {
        catalog_write: Arc::new(SqliteCatalogWriteRepository::new(Arc::clone(&pool))),
        catalog_read: Arc::new(SqliteCatalogReadRepository::new(Arc::clone(&pool))),
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool))),
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool))),
        content_write: Arc::new(SqliteContentWriteRepository::new(Arc::clone(&pool))),
        content_read: Arc::new(SqliteContentReadRepository::new(Arc::clone(&pool))),
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        config.chapter_policy().clone(),
    ));

    let state = HttpState { services };
    let app = build_router_with_options(state, &config.router_options());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
