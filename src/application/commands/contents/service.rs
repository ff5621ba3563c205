use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleId, ArticleReadRepository},
        content::{ContentReadRepository, ContentWriteRepository},
    },
};

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl ContentCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
        }
    }

    pub(super) async fn existing_article(&self, raw_id: i64) -> ApplicationResult<ArticleId> {
        let missing = || ApplicationError::validation(format!("article {raw_id} does not exist"));
        let id = ArticleId::requested(raw_id)?.ok_or_else(missing)?;
        self.article_repo
            .find_by_id(id)
            .await?
            .map(|article| article.id)
            .ok_or_else(missing)
    }
}
