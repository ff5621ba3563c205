use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::catalog::{Catalog, CatalogId, CatalogName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const SELECT_ARTICLES: &str = "SELECT a.article_id, a.catalog_id, c.name AS catalog_name, a.title, a.description, a.date_or_banner FROM articles a JOIN catalogs c ON c.catalog_id = a.catalog_id";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    catalog_id: i64,
    catalog_name: String,
    title: String,
    description: String,
    date_or_banner: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            catalog: Catalog {
                id: CatalogId::new(row.catalog_id)?,
                name: CatalogName::new(row.catalog_name)?,
            },
            title: ArticleTitle::new(row.title)?,
            description: row.description,
            date_or_banner: row.date_or_banner,
        })
    }
}

async fn fetch_article(pool: &SqlitePool, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLES} WHERE a.article_id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

async fn fetch_articles(mut builder: QueryBuilder<'_, Sqlite>, pool: &SqlitePool) -> DomainResult<Vec<Article>> {
    builder.push(" ORDER BY a.article_id");
    builder
        .build_query_as::<ArticleRow>()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Article::try_from)
        .collect()
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            catalog_id,
            title,
            description,
            date_or_banner,
        } = article;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (article_id, catalog_id, title, description, date_or_banner) VALUES (?, ?, ?, ?, ?) RETURNING article_id",
        )
        .bind(id.map(i64::from))
        .bind(i64::from(catalog_id))
        .bind(title.as_str())
        .bind(description)
        .bind(date_or_banner)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        fetch_article(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence(format!("article {id} vanished after insert")))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            catalog_id,
            title,
            description,
            date_or_banner,
        } = update;

        let result = sqlx::query(
            "UPDATE articles SET catalog_id = ?, title = ?, description = ?, date_or_banner = ? WHERE article_id = ?",
        )
        .bind(i64::from(catalog_id))
        .bind(title.as_str())
        .bind(description)
        .bind(date_or_banner)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let vanished = || DomainError::Concurrency(format!("article {id} was removed"));
        if result.rows_affected() == 0 {
            return Err(vanished());
        }
        fetch_article(&self.pool, i64::from(id)).await?.ok_or_else(vanished)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_article(&self.pool, i64::from(id)).await
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        fetch_articles(QueryBuilder::new(SELECT_ARTICLES), &self.pool).await
    }

    async fn list_by_catalog(&self, catalog_id: CatalogId) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLES);
        builder.push(" WHERE a.catalog_id = ");
        builder.push_bind(i64::from(catalog_id));
        fetch_articles(builder, &self.pool).await
    }

    async fn list_excluding_catalogs(&self, excluded: &[CatalogId]) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLES);
        if !excluded.is_empty() {
            builder.push(" WHERE a.catalog_id NOT IN (");
            let mut separated = builder.separated(", ");
            for id in excluded {
                separated.push_bind(i64::from(*id));
            }
            separated.push_unseparated(")");
        }
        fetch_articles(builder, &self.pool).await
    }

    async fn count(&self) -> DomainResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn exists_in_catalog(&self, catalog_id: CatalogId) -> DomainResult<bool> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE catalog_id = ?)")
                .bind(i64::from(catalog_id))
                .fetch_one(&*self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(found != 0)
    }
}
