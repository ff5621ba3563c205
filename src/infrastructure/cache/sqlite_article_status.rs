use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sync::{ArticleStatus, ArticleStatusRepository, PageKey};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleStatusRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleStatusRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StatusRow {
    status_id: i64,
    catalog_id: i64,
    page_number: i64,
    synced_on: NaiveDate,
}

impl TryFrom<StatusRow> for ArticleStatus {
    type Error = DomainError;

    fn try_from(row: StatusRow) -> Result<Self, Self::Error> {
        Ok(ArticleStatus {
            id: row.status_id,
            key: PageKey::new(row.catalog_id, row.page_number)?,
            current_date: row.synced_on,
        })
    }
}

#[async_trait]
impl ArticleStatusRepository for SqliteArticleStatusRepository {
    async fn find(&self, key: PageKey) -> DomainResult<Option<ArticleStatus>> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT status_id, catalog_id, page_number, synced_on FROM article_status WHERE catalog_id = ? AND page_number = ?",
        )
        .bind(key.catalog_id())
        .bind(key.page_number())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleStatus::try_from).transpose()
    }

    async fn upsert(&self, key: PageKey, current_date: NaiveDate) -> DomainResult<ArticleStatus> {
        let row = sqlx::query_as::<_, StatusRow>(
            "INSERT INTO article_status (catalog_id, page_number, synced_on) VALUES (?, ?, ?) \
             ON CONFLICT (catalog_id, page_number) DO UPDATE SET synced_on = excluded.synced_on \
             RETURNING status_id, catalog_id, page_number, synced_on",
        )
        .bind(key.catalog_id())
        .bind(key.page_number())
        .bind(current_date)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleStatus::try_from(row)
    }
}
