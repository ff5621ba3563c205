use crate::domain::article::ArticleId;
use crate::domain::catalog::CatalogId;
use crate::domain::content::entity::{Content, ContentUpdate, NewContent};
use crate::domain::content::value_objects::ContentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, content: NewContent) -> DomainResult<Content>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<Content>;
    async fn delete(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<Content>>;
    async fn list(&self) -> DomainResult<Vec<Content>>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Content>>;
    /// Contents of every article in `catalog_id`, ordered by content id.
    async fn list_by_catalog(&self, catalog_id: CatalogId) -> DomainResult<Vec<Content>>;
    /// Contents of every article whose catalog is not one of `excluded`.
    async fn list_excluding_catalogs(&self, excluded: &[CatalogId]) -> DomainResult<Vec<Content>>;
    async fn exists_for_article(&self, article_id: ArticleId) -> DomainResult<bool>;
}
