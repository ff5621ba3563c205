use super::CatalogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::catalog::{CatalogId, CatalogName, CatalogUpdate},
};

pub struct UpdateCatalogCommand {
    pub path_id: i64,
    pub id: i64,
    pub name: String,
}

impl CatalogCommandService {
    pub async fn update_catalog(&self, command: UpdateCatalogCommand) -> ApplicationResult<()> {
        if command.path_id < 0 || command.path_id != command.id {
            return Err(ApplicationError::validation(
                "catalog id in path does not match payload",
            ));
        }
        let id = CatalogId::requested(command.id)?;
        let name = CatalogName::new(command.name)?;

        let Some(id) = id else {
            return Err(ApplicationError::not_found("catalog not found"));
        };
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("catalog not found"))?;

        self.write_repo.update(CatalogUpdate { id, name }).await?;
        tracing::info!(catalog_id = %id, "catalog updated");
        Ok(())
    }
}
