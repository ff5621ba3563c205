use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let not_found = || ApplicationError::not_found("article not found");
        let id = ArticleId::new(query.id).map_err(|_| not_found())?;
        let article = self.read_repo.find_by_id(id).await?.ok_or_else(not_found)?;
        let contents = self.content_repo.list_by_article(id).await?;
        Self::with_content(vec![article], contents)
            .pop()
            .ok_or_else(not_found)
    }
}
