// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub id: i64,
    pub catalog_id: i64,
    pub title: String,
    pub description: String,
    pub date_or_banner: String,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::requested(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let catalog_id = self.existing_catalog(command.catalog_id).await?;

        let new_article = NewArticle {
            id,
            catalog_id,
            title,
            description: command.description,
            date_or_banner: command.date_or_banner,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, catalog_id = %catalog_id, "article created");
        Ok(ArticleDto::from_article(created, Vec::new()))
    }
}
