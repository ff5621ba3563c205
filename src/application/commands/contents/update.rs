use super::ContentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::content::{ContentData, ContentId, ContentUpdate},
};

pub struct UpdateContentCommand {
    pub path_id: i64,
    pub id: i64,
    pub article_id: i64,
    pub data: String,
}

impl ContentCommandService {
    pub async fn update_content(&self, command: UpdateContentCommand) -> ApplicationResult<()> {
        if command.path_id < 0 || command.path_id != command.id {
            return Err(ApplicationError::validation(
                "content id in path does not match payload",
            ));
        }
        let id = ContentId::requested(command.id)?;
        let data = ContentData::new(command.data)?;
        if command.article_id < 0 {
            return Err(ApplicationError::validation("article id must not be negative"));
        }

        let Some(id) = id else {
            return Err(ApplicationError::not_found("content not found"));
        };
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;
        let article_id = self.existing_article(command.article_id).await?;

        self.write_repo
            .update(ContentUpdate {
                id,
                article_id,
                data,
            })
            .await?;
        tracing::info!(content_id = %id, "content updated");
        Ok(())
    }
}
