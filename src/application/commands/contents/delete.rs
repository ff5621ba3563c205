use super::ContentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::content::ContentId,
};

pub struct DeleteContentCommand {
    pub id: i64,
}

impl ContentCommandService {
    pub async fn delete_content(&self, command: DeleteContentCommand) -> ApplicationResult<()> {
        let id = ContentId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(content_id = %id, "content deleted");
        Ok(())
    }
}
