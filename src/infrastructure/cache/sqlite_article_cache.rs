use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sync::{ArticleCache, PageKey, SyncedArticle};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

/// Client-side copy of fetched chapter pages, one row per article per page.
#[derive(Clone)]
pub struct SqliteArticleCache {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleCache {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CachedArticleRow {
    article_id: i64,
    source_catalog_id: i64,
    catalog_name: String,
    title: String,
    description: String,
    date_or_banner: String,
    content: String,
}

impl TryFrom<CachedArticleRow> for SyncedArticle {
    type Error = DomainError;

    fn try_from(row: CachedArticleRow) -> Result<Self, Self::Error> {
        let content = serde_json::from_str(&row.content).map_err(|err| {
            DomainError::Persistence(format!(
                "cached content of article {} is not a JSON list: {err}",
                row.article_id
            ))
        })?;
        Ok(SyncedArticle {
            id: row.article_id,
            catalog_id: row.source_catalog_id,
            catalog_name: row.catalog_name,
            title: row.title,
            description: row.description,
            date_or_banner: row.date_or_banner,
            content,
        })
    }
}

#[async_trait]
impl ArticleCache for SqliteArticleCache {
    async fn list_page(&self, key: PageKey) -> DomainResult<Vec<SyncedArticle>> {
        sqlx::query_as::<_, CachedArticleRow>(
            "SELECT article_id, source_catalog_id, catalog_name, title, description, date_or_banner, content FROM cached_articles WHERE catalog_id = ? AND page_number = ? ORDER BY position",
        )
        .bind(key.catalog_id())
        .bind(key.page_number())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(SyncedArticle::try_from)
        .collect()
    }

    async fn count_all(&self) -> DomainResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cached_articles")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn replace_page(&self, key: PageKey, articles: &[SyncedArticle]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM cached_articles WHERE catalog_id = ? AND page_number = ?")
            .bind(key.catalog_id())
            .bind(key.page_number())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        for (position, article) in articles.iter().enumerate() {
            let content = serde_json::to_string(&article.content)
                .map_err(|err| DomainError::Persistence(err.to_string()))?;
            let position = i64::try_from(position)
                .map_err(|err| DomainError::Persistence(err.to_string()))?;

            // A page can list the same article twice; the later copy wins.
            sqlx::query(
                "INSERT OR REPLACE INTO cached_articles (catalog_id, page_number, article_id, position, source_catalog_id, catalog_name, title, description, date_or_banner, content) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(key.catalog_id())
            .bind(key.page_number())
            .bind(article.id)
            .bind(position)
            .bind(article.catalog_id)
            .bind(&article.catalog_name)
            .bind(&article.title)
            .bind(&article.description)
            .bind(&article.date_or_banner)
            .bind(content)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }
}
