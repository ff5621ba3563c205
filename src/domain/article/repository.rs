use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::catalog::CatalogId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    async fn list_by_catalog(&self, catalog_id: CatalogId) -> DomainResult<Vec<Article>>;
    /// Every article whose catalog is not one of `excluded`.
    async fn list_excluding_catalogs(&self, excluded: &[CatalogId]) -> DomainResult<Vec<Article>>;
    async fn count(&self) -> DomainResult<i64>;
    async fn exists_in_catalog(&self, catalog_id: CatalogId) -> DomainResult<bool>;
}
