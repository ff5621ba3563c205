use crate::domain::errors::DomainResult;
use crate::domain::sync::entity::{ArticleStatus, PageKey, RemotePage, SyncedArticle};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Local copy of fetched pages.
#[async_trait]
pub trait ArticleCache: Send + Sync {
    async fn list_page(&self, key: PageKey) -> DomainResult<Vec<SyncedArticle>>;
    /// Number of cached rows across every catalog and page.
    async fn count_all(&self) -> DomainResult<i64>;
    /// Drops the cached rows of `key` and stores `articles` in their place.
    async fn replace_page(&self, key: PageKey, articles: &[SyncedArticle]) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleStatusRepository: Send + Sync {
    async fn find(&self, key: PageKey) -> DomainResult<Option<ArticleStatus>>;
    async fn upsert(&self, key: PageKey, current_date: NaiveDate) -> DomainResult<ArticleStatus>;
}

#[async_trait]
pub trait RemoteChapterSource: Send + Sync {
    /// `Ok(None)` when the server has no page to give back.
    async fn fetch_page(&self, key: PageKey) -> DomainResult<Option<RemotePage>>;
}
