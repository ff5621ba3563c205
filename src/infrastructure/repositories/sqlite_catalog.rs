use crate::domain::catalog::{
    Catalog, CatalogId, CatalogName, CatalogReadRepository, CatalogUpdate,
    CatalogWriteRepository, NewCatalog,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCatalogWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCatalogWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCatalogReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCatalogReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CatalogRow {
    catalog_id: i64,
    name: String,
}

impl TryFrom<CatalogRow> for Catalog {
    type Error = DomainError;

    fn try_from(row: CatalogRow) -> Result<Self, Self::Error> {
        Ok(Catalog {
            id: CatalogId::new(row.catalog_id)?,
            name: CatalogName::new(row.name)?,
        })
    }
}

#[async_trait]
impl CatalogWriteRepository for SqliteCatalogWriteRepository {
    async fn insert(&self, catalog: NewCatalog) -> DomainResult<Catalog> {
        let NewCatalog { id, name } = catalog;

        let row = sqlx::query_as::<_, CatalogRow>(
            "INSERT INTO catalogs (catalog_id, name) VALUES (?, ?) RETURNING catalog_id, name",
        )
        .bind(id.map(i64::from))
        .bind(name.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Catalog::try_from(row)
    }

    async fn update(&self, update: CatalogUpdate) -> DomainResult<Catalog> {
        let CatalogUpdate { id, name } = update;

        let row = sqlx::query_as::<_, CatalogRow>(
            "UPDATE catalogs SET name = ? WHERE catalog_id = ? RETURNING catalog_id, name",
        )
        .bind(name.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::Concurrency(format!("catalog {id} was removed")))?;

        Catalog::try_from(row)
    }

    async fn delete(&self, id: CatalogId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM catalogs WHERE catalog_id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("catalog {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogReadRepository for SqliteCatalogReadRepository {
    async fn find_by_id(&self, id: CatalogId) -> DomainResult<Option<Catalog>> {
        let row = sqlx::query_as::<_, CatalogRow>(
            "SELECT catalog_id, name FROM catalogs WHERE catalog_id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Catalog::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CatalogName) -> DomainResult<Option<Catalog>> {
        let row = sqlx::query_as::<_, CatalogRow>(
            "SELECT catalog_id, name FROM catalogs WHERE name = ? ORDER BY catalog_id LIMIT 1",
        )
        .bind(name.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Catalog::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Catalog>> {
        sqlx::query_as::<_, CatalogRow>("SELECT catalog_id, name FROM catalogs ORDER BY catalog_id")
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Catalog::try_from)
            .collect()
    }
}
