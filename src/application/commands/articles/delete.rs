// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if self.content_repo.exists_for_article(id).await? {
            return Err(ApplicationError::conflict(format!(
                "article {id} is still referenced by contents"
            )));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
