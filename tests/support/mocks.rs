// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use ant_hub::application::ports::time::Clock;
use ant_hub::domain::article::{
    Article, ArticleId, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use ant_hub::domain::catalog::{
    Catalog, CatalogId, CatalogUpdate, CatalogWriteRepository, NewCatalog,
};
use ant_hub::domain::content::{
    Content, ContentId, ContentUpdate, ContentWriteRepository, NewContent,
};
use ant_hub::domain::errors::{DomainError, DomainResult};
use ant_hub::domain::sync::{
    ArticleCache, ArticleStatus, ArticleStatusRepository, PageKey, RemoteChapterSource,
    RemotePage, SyncedArticle,
};
use ant_hub::infrastructure::repositories::{
    SqliteArticleWriteRepository, SqliteCatalogWriteRepository, SqliteContentWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Default)]
pub struct InMemoryArticleCache {
    pages: Mutex<HashMap<PageKey, Vec<SyncedArticle>>>,
}

impl InMemoryArticleCache {
    pub fn with_page(key: PageKey, articles: Vec<SyncedArticle>) -> Self {
        let cache = Self::default();
        cache.pages.lock().unwrap().insert(key, articles);
        cache
    }

    pub fn page(&self, key: PageKey) -> Vec<SyncedArticle> {
        self.pages
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ArticleCache for InMemoryArticleCache {
    async fn list_page(&self, key: PageKey) -> DomainResult<Vec<SyncedArticle>> {
        Ok(self.page(key))
    }

    async fn count_all(&self) -> DomainResult<i64> {
        let total: usize = self.pages.lock().unwrap().values().map(Vec::len).sum();
        Ok(i64::try_from(total).unwrap())
    }

    async fn replace_page(&self, key: PageKey, articles: &[SyncedArticle]) -> DomainResult<()> {
        self.pages.lock().unwrap().insert(key, articles.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStatusRepository {
    rows: Mutex<HashMap<PageKey, ArticleStatus>>,
}

impl InMemoryStatusRepository {
    pub fn with_status(key: PageKey, date: NaiveDate) -> Self {
        let repo = Self::default();
        repo.rows.lock().unwrap().insert(
            key,
            ArticleStatus {
                id: 1,
                key,
                current_date: date,
            },
        );
        repo
    }

    pub fn date_of(&self, key: PageKey) -> Option<NaiveDate> {
        self.rows
            .lock()
            .unwrap()
            .get(&key)
            .map(|status| status.current_date)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleStatusRepository for InMemoryStatusRepository {
    async fn find(&self, key: PageKey) -> DomainResult<Option<ArticleStatus>> {
        Ok(self.rows.lock().unwrap().get(&key).cloned())
    }

    async fn upsert(&self, key: PageKey, current_date: NaiveDate) -> DomainResult<ArticleStatus> {
        let mut rows = self.rows.lock().unwrap();
        let next_id = i64::try_from(rows.len()).unwrap() + 1;
        let status = rows.entry(key).or_insert(ArticleStatus {
            id: next_id,
            key,
            current_date,
        });
        status.current_date = current_date;
        Ok(status.clone())
    }
}

/// Remote source answering every request with the same canned result.
pub struct StubRemote {
    response: Result<Option<RemotePage>, String>,
    calls: AtomicUsize,
}

impl StubRemote {
    pub fn returning(page: RemotePage) -> Self {
        Self {
            response: Ok(Some(page)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            response: Ok(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteChapterSource for StubRemote {
    async fn fetch_page(&self, _key: PageKey) -> DomainResult<Option<RemotePage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(DomainError::Remote)
    }
}

/// Write repositories whose `update` loses a race: the row is deleted right
/// before the real SQLite update runs. Inserts and deletes pass through.
pub struct VanishingRowWriter {
    pool: Arc<SqlitePool>,
    catalogs: SqliteCatalogWriteRepository,
    articles: SqliteArticleWriteRepository,
    contents: SqliteContentWriteRepository,
}

impl VanishingRowWriter {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            catalogs: SqliteCatalogWriteRepository::new(Arc::clone(&pool)),
            articles: SqliteArticleWriteRepository::new(Arc::clone(&pool)),
            contents: SqliteContentWriteRepository::new(Arc::clone(&pool)),
            pool,
        }
    }

    async fn remove(&self, table: &str, key: &str, id: i64) {
        sqlx::query(&format!("DELETE FROM {table} WHERE {key} = ?"))
            .bind(id)
            .execute(&*self.pool)
            .await
            .unwrap();
    }
}

#[async_trait]
impl CatalogWriteRepository for VanishingRowWriter {
    async fn insert(&self, catalog: NewCatalog) -> DomainResult<Catalog> {
        self.catalogs.insert(catalog).await
    }

    async fn update(&self, update: CatalogUpdate) -> DomainResult<Catalog> {
        self.remove("catalogs", "catalog_id", update.id.into()).await;
        self.catalogs.update(update).await
    }

    async fn delete(&self, id: CatalogId) -> DomainResult<()> {
        self.catalogs.delete(id).await
    }
}

#[async_trait]
impl ArticleWriteRepository for VanishingRowWriter {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.articles.insert(article).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.remove("articles", "article_id", update.id.into()).await;
        self.articles.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles.delete(id).await
    }
}

#[async_trait]
impl ContentWriteRepository for VanishingRowWriter {
    async fn insert(&self, content: NewContent) -> DomainResult<Content> {
        self.contents.insert(content).await
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<Content> {
        self.remove("contents", "content_id", update.id.into()).await;
        self.contents.update(update).await
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        self.contents.delete(id).await
    }
}
