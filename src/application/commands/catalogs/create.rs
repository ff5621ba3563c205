// src/application/commands/catalogs/create.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::CatalogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CatalogId, CatalogName, NewCatalog},
};

pub struct CreateCatalogCommand {
    pub id: i64,
    pub name: String,
}

impl CatalogCommandService {
    pub async fn create_catalog(&self, command: CreateCatalogCommand) -> ApplicationResult<CatalogDto> {
        let id = CatalogId::requested(command.id)?;
        let name = CatalogName::new(command.name)?;

        // Names are only kept unique here; the table itself does not enforce it.
        if self.read_repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "catalog name '{name}' is already taken"
            )));
        }

        let created = self.write_repo.insert(NewCatalog { id, name }).await?;
        tracing::info!(catalog_id = %created.id, "catalog created");
        Ok(created.into())
    }
}
