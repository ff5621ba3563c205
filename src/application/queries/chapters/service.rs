// src/application/queries/chapters/service.rs
use std::sync::Arc;

use crate::{
    application::dto::ChapterDto,
    domain::{
        article::{Article, ArticleReadRepository},
        catalog::CatalogReadRepository,
        chapter::{ChapterPolicy, assemble_chapters},
        content::{Content, ContentReadRepository},
    },
};

pub struct ChapterQueryService {
    pub(super) catalog_repo: Arc<dyn CatalogReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
    pub(super) policy: ChapterPolicy,
}

impl ChapterQueryService {
    pub fn new(
        catalog_repo: Arc<dyn CatalogReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
        policy: ChapterPolicy,
    ) -> Self {
        Self {
            catalog_repo,
            article_repo,
            content_repo,
            policy,
        }
    }

    pub fn policy(&self) -> &ChapterPolicy {
        &self.policy
    }

    /// Joins articles with contents loaded for the same scope.
    pub(super) fn chapters_of(articles: Vec<Article>, contents: Vec<Content>) -> Vec<ChapterDto> {
        assemble_chapters(articles, contents)
            .into_iter()
            .map(ChapterDto::from)
            .collect()
    }
}
