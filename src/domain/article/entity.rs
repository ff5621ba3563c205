// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::catalog::{Catalog, CatalogId};

/// An article as read back from storage, with its owning catalog resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub catalog: Catalog,
    pub title: ArticleTitle,
    pub description: String,
    pub date_or_banner: String,
}

impl Article {
    pub fn catalog_id(&self) -> CatalogId {
        self.catalog.id
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: Option<ArticleId>,
    pub catalog_id: CatalogId,
    pub title: ArticleTitle,
    pub description: String,
    pub date_or_banner: String,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub catalog_id: CatalogId,
    pub title: ArticleTitle,
    pub description: String,
    pub date_or_banner: String,
}
