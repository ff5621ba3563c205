use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::content::{ContentData, ContentId, NewContent},
};

pub struct CreateContentCommand {
    pub id: i64,
    pub article_id: i64,
    pub data: String,
}

impl ContentCommandService {
    pub async fn create_content(&self, command: CreateContentCommand) -> ApplicationResult<ContentDto> {
        let id = ContentId::requested(command.id)?;
        let data = ContentData::new(command.data)?;
        let article_id = self.existing_article(command.article_id).await?;

        let created = self
            .write_repo
            .insert(NewContent {
                id,
                article_id,
                data,
            })
            .await?;
        tracing::info!(content_id = %created.id, article_id = %article_id, "content created");
        Ok(created.into())
    }
}
