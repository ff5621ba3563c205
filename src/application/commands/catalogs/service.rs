// src/application/commands/catalogs/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository,
    catalog::{CatalogReadRepository, CatalogWriteRepository},
};

pub struct CatalogCommandService {
    pub(super) write_repo: Arc<dyn CatalogWriteRepository>,
    pub(super) read_repo: Arc<dyn CatalogReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl CatalogCommandService {
    pub fn new(
        write_repo: Arc<dyn CatalogWriteRepository>,
        read_repo: Arc<dyn CatalogReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
        }
    }
}
