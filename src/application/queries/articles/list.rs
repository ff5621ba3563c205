use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        let contents = self.content_repo.list().await?;
        Ok(Self::with_content(articles, contents))
    }
}
