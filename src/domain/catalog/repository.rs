use crate::domain::catalog::entity::{Catalog, CatalogUpdate, NewCatalog};
use crate::domain::catalog::value_objects::{CatalogId, CatalogName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogWriteRepository: Send + Sync {
    async fn insert(&self, catalog: NewCatalog) -> DomainResult<Catalog>;
    /// Fails with `DomainError::Concurrency` when the row disappeared since it was read.
    async fn update(&self, update: CatalogUpdate) -> DomainResult<Catalog>;
    async fn delete(&self, id: CatalogId) -> DomainResult<()>;
}

#[async_trait]
pub trait CatalogReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CatalogId) -> DomainResult<Option<Catalog>>;
    async fn find_by_name(&self, name: &CatalogName) -> DomainResult<Option<Catalog>>;
    async fn list(&self) -> DomainResult<Vec<Catalog>>;
}
