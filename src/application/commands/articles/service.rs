// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        catalog::{CatalogId, CatalogReadRepository},
        content::ContentReadRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) catalog_repo: Arc<dyn CatalogReadRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        catalog_repo: Arc<dyn CatalogReadRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            catalog_repo,
            content_repo,
        }
    }

    /// Resolves the catalog an article points at; a dangling reference is a bad payload.
    pub(super) async fn existing_catalog(&self, raw_id: i64) -> ApplicationResult<CatalogId> {
        let missing = || ApplicationError::validation(format!("catalog {raw_id} does not exist"));
        let id = CatalogId::requested(raw_id)?.ok_or_else(missing)?;
        self.catalog_repo
            .find_by_id(id)
            .await?
            .map(|catalog| catalog.id)
            .ok_or_else(missing)
    }
}
