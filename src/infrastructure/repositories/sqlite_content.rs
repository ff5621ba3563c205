use crate::domain::article::ArticleId;
use crate::domain::catalog::CatalogId;
use crate::domain::content::{
    Content, ContentData, ContentId, ContentReadRepository, ContentUpdate,
    ContentWriteRepository, NewContent,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteContentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteContentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteContentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteContentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    content_id: i64,
    article_id: i64,
    data: String,
}

impl TryFrom<ContentRow> for Content {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(Content {
            id: ContentId::new(row.content_id)?,
            article_id: ArticleId::new(row.article_id)?,
            data: ContentData::new(row.data)?,
        })
    }
}

fn into_contents(rows: Vec<ContentRow>) -> DomainResult<Vec<Content>> {
    rows.into_iter().map(Content::try_from).collect()
}

#[async_trait]
impl ContentWriteRepository for SqliteContentWriteRepository {
    async fn insert(&self, content: NewContent) -> DomainResult<Content> {
        let NewContent {
            id,
            article_id,
            data,
        } = content;

        let row = sqlx::query_as::<_, ContentRow>(
            "INSERT INTO contents (content_id, article_id, data) VALUES (?, ?, ?) RETURNING content_id, article_id, data",
        )
        .bind(id.map(i64::from))
        .bind(i64::from(article_id))
        .bind(data.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Content::try_from(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<Content> {
        let ContentUpdate {
            id,
            article_id,
            data,
        } = update;

        let row = sqlx::query_as::<_, ContentRow>(
            "UPDATE contents SET article_id = ?, data = ? WHERE content_id = ? RETURNING content_id, article_id, data",
        )
        .bind(i64::from(article_id))
        .bind(data.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::Concurrency(format!("content {id} was removed")))?;

        Content::try_from(row)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contents WHERE content_id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("content {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadRepository for SqliteContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<Content>> {
        let row = sqlx::query_as::<_, ContentRow>(
            "SELECT content_id, article_id, data FROM contents WHERE content_id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Content::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Content>> {
        let rows = sqlx::query_as::<_, ContentRow>(
            "SELECT content_id, article_id, data FROM contents ORDER BY content_id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_contents(rows)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Content>> {
        let rows = sqlx::query_as::<_, ContentRow>(
            "SELECT content_id, article_id, data FROM contents WHERE article_id = ? ORDER BY content_id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_contents(rows)
    }

    async fn list_by_catalog(&self, catalog_id: CatalogId) -> DomainResult<Vec<Content>> {
        let rows = sqlx::query_as::<_, ContentRow>(
            "SELECT c.content_id, c.article_id, c.data FROM contents c JOIN articles a ON a.article_id = c.article_id WHERE a.catalog_id = ? ORDER BY c.content_id",
        )
        .bind(i64::from(catalog_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_contents(rows)
    }

    async fn list_excluding_catalogs(&self, excluded: &[CatalogId]) -> DomainResult<Vec<Content>> {
        if excluded.is_empty() {
            return self.list().await;
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT c.content_id, c.article_id, c.data FROM contents c JOIN articles a ON a.article_id = c.article_id WHERE a.catalog_id NOT IN (",
        );
        {
            let mut separated = builder.separated(", ");
            for id in excluded {
                separated.push_bind(i64::from(*id));
            }
            separated.push_unseparated(") ORDER BY c.content_id");
        }

        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        into_contents(rows)
    }

    async fn exists_for_article(&self, article_id: ArticleId) -> DomainResult<bool> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM contents WHERE article_id = ?)")
                .bind(i64::from(article_id))
                .fetch_one(&*self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(found != 0)
    }
}
