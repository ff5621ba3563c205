use super::CatalogQueryService;
use crate::{
    application::{
        dto::CatalogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::CatalogId,
};

pub struct GetCatalogByIdQuery {
    pub id: i64,
}

impl CatalogQueryService {
    pub async fn get_catalog_by_id(&self, query: GetCatalogByIdQuery) -> ApplicationResult<CatalogDto> {
        let not_found = || ApplicationError::not_found("catalog not found");
        let id = CatalogId::new(query.id).map_err(|_| not_found())?;
        let catalog = self.read_repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Ok(catalog.into())
    }
}
