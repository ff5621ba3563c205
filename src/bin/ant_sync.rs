//! Headless sync client: `ant_sync <catalogId> [pageNumber]`.
use ant_hub::application::{ports::time::Clock, sync::ArticleSyncService};
use ant_hub::config::SyncConfig;
use ant_hub::infrastructure::{
    cache::{SqliteArticleCache, SqliteArticleStatusRepository},
    database,
    remote::HttpChapterSource,
    time::SystemClock,
};
use ant_hub::telemetry::init_tracing;
use anyhow::{Context, Result, bail};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "sync failed");
        eprintln!("sync failed: {err:#}");
        std::process::exit(1);
    }
}

fn parse_args() -> Result<(i64, i64)> {
    let mut args = std::env::args().skip(1);
    let Some(catalog_id) = args.next() else {
        bail!("usage: ant_sync <catalogId> [pageNumber]");
    };
    let catalog_id = catalog_id
        .parse()
        .with_context(|| format!("catalog id '{catalog_id}' is not a number"))?;
    let page_number = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("page number '{raw}' is not a number"))?,
        None => 1,
    };
    Ok((catalog_id, page_number))
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let (catalog_id, page_number) = parse_args()?;
    let config = SyncConfig::from_env()?;

    let pool = database::init_pool(config.cache_database_url()).await?;
    database::run_cache_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let remote = HttpChapterSource::new(config.api_base_url(), config.http_timeout())?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let service = ArticleSyncService::new(
        Arc::new(SqliteArticleCache::new(Arc::clone(&pool))),
        Arc::new(SqliteArticleStatusRepository::new(Arc::clone(&pool))),
        Arc::new(remote),
        clock,
    );

    let articles = service.get_page(catalog_id, page_number).await?;
    for article in &articles {
        println!("{}\t{}\t{}", article.id, article.date_or_banner, article.title);
    }
    tracing::info!(catalog_id, page_number, count = articles.len(), "page ready");
    Ok(())
}
