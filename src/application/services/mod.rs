// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, catalogs::CatalogCommandService,
            contents::ContentCommandService,
        },
        queries::{
            articles::ArticleQueryService, catalogs::CatalogQueryService,
            chapters::ChapterQueryService, contents::ContentQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        catalog::{CatalogReadRepository, CatalogWriteRepository},
        chapter::ChapterPolicy,
        content::{ContentReadRepository, ContentWriteRepository},
    },
};

/// Repository handles the server services are built from.
pub struct Repositories {
    pub catalog_write: Arc<dyn CatalogWriteRepository>,
    pub catalog_read: Arc<dyn CatalogReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub content_write: Arc<dyn ContentWriteRepository>,
    pub content_read: Arc<dyn ContentReadRepository>,
}

pub struct ApplicationServices {
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub chapter_queries: Arc<ChapterQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, policy: ChapterPolicy) -> Self {
        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&repos.catalog_write),
            Arc::clone(&repos.catalog_read),
            Arc::clone(&repos.article_read),
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(Arc::clone(&repos.catalog_read)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.catalog_read),
            Arc::clone(&repos.content_read),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.content_read),
        ));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&repos.content_write),
            Arc::clone(&repos.content_read),
            Arc::clone(&repos.article_read),
        ));
        let content_queries = Arc::new(ContentQueryService::new(Arc::clone(&repos.content_read)));

        let chapter_queries = Arc::new(ChapterQueryService::new(
            repos.catalog_read,
            repos.article_read,
            repos.content_read,
            policy,
        ));

        Self {
            catalog_commands,
            catalog_queries,
            article_commands,
            article_queries,
            content_commands,
            content_queries,
            chapter_queries,
        }
    }
}
