use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub path_id: i64,
    pub id: i64,
    pub catalog_id: i64,
    pub title: String,
    pub description: String,
    pub date_or_banner: String,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        if command.path_id < 0 || command.path_id != command.id {
            return Err(ApplicationError::validation(
                "article id in path does not match payload",
            ));
        }
        let id = ArticleId::requested(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        if command.catalog_id < 0 {
            return Err(ApplicationError::validation("catalog id must not be negative"));
        }

        let Some(id) = id else {
            return Err(ApplicationError::not_found("article not found"));
        };
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let catalog_id = self.existing_catalog(command.catalog_id).await?;

        let update = ArticleUpdate {
            id,
            catalog_id,
            title,
            description: command.description,
            date_or_banner: command.date_or_banner,
        };
        self.write_repo.update(update).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(())
    }
}
