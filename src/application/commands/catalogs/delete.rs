use super::CatalogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::catalog::CatalogId,
};

pub struct DeleteCatalogCommand {
    pub id: i64,
}

impl CatalogCommandService {
    pub async fn delete_catalog(&self, command: DeleteCatalogCommand) -> ApplicationResult<()> {
        let id = CatalogId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("catalog not found"))?;

        if self.article_repo.exists_in_catalog(id).await? {
            return Err(ApplicationError::conflict(format!(
                "catalog {id} is still referenced by articles"
            )));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(catalog_id = %id, "catalog deleted");
        Ok(())
    }
}
