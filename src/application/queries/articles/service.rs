use std::sync::Arc;

use crate::{
    application::dto::ArticleDto,
    domain::{
        article::{Article, ArticleReadRepository},
        chapter::assemble_chapters,
        content::{Content, ContentReadRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            content_repo,
        }
    }

    /// Attaches each article's content data, in content id order.
    pub(super) fn with_content(articles: Vec<Article>, contents: Vec<Content>) -> Vec<ArticleDto> {
        assemble_chapters(articles, contents)
            .into_iter()
            .map(ArticleDto::from)
            .collect()
    }
}
