// src/application/sync/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::sync::{
        ArticleCache, ArticleStatusRepository, PageKey, RemoteChapterSource, SyncedArticle,
    },
};

/// Serves a catalog page from the local cache, refreshing it from the
/// server at most once per calendar day.
pub struct ArticleSyncService {
    cache: Arc<dyn ArticleCache>,
    statuses: Arc<dyn ArticleStatusRepository>,
    remote: Arc<dyn RemoteChapterSource>,
    clock: Arc<dyn Clock>,
}

impl ArticleSyncService {
    pub fn new(
        cache: Arc<dyn ArticleCache>,
        statuses: Arc<dyn ArticleStatusRepository>,
        remote: Arc<dyn RemoteChapterSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            statuses,
            remote,
            clock,
        }
    }

    pub async fn get_page(
        &self,
        catalog_id: i64,
        page_number: i64,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let key = PageKey::new(catalog_id, page_number)?;
        let cached = self.cache.list_page(key).await?;
        let today = self.clock.today();

        let status = self.statuses.find(key).await?;
        if status.as_ref().is_some_and(|status| status.is_current(today)) {
            tracing::debug!(catalog_id, page_number, rows = cached.len(), "serving cached page");
            return Ok(into_dtos(cached));
        }

        let page = self.remote.fetch_page(key).await?.ok_or_else(|| {
            ApplicationError::infrastructure(format!(
                "server returned no page {page_number} for catalog {catalog_id}"
            ))
        })?;

        // Compared against every cached row, not just this page's.
        let local_total = self.cache.count_all().await?;
        if page.total_records == local_total {
            tracing::info!(
                catalog_id,
                page_number,
                total_records = page.total_records,
                "remote total matches cache, keeping cached page"
            );
            return Ok(into_dtos(cached));
        }

        self.cache.replace_page(key, &page.articles).await?;
        self.statuses.upsert(key, today).await?;
        tracing::info!(
            catalog_id,
            page_number,
            fetched = page.articles.len(),
            total_records = page.total_records,
            synced_on = %today,
            "page refreshed from server"
        );
        Ok(into_dtos(page.articles))
    }
}

fn into_dtos(articles: Vec<SyncedArticle>) -> Vec<ArticleDto> {
    articles.into_iter().map(ArticleDto::from).collect()
}
