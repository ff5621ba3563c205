use super::CatalogQueryService;
use crate::application::{dto::CatalogDto, error::ApplicationResult};

impl CatalogQueryService {
    pub async fn list_catalogs(&self) -> ApplicationResult<Vec<CatalogDto>> {
        let catalogs = self.read_repo.list().await?;
        Ok(catalogs.into_iter().map(Into::into).collect())
    }
}
